//! `DirectionsProvider` over the OpenRouteService directions API.

use std::time::Duration;

use geo::Coord;
use helios_core::{CandidateRoute, DirectionsError, DirectionsProvider, TripRequest};

use super::ors::{AlternativeRoutes, DirectionsRequestBody, DirectionsResponse, RouteFeature};
use crate::blocking::{BlockingClient, DEFAULT_USER_AGENT, RequestFailure};
use crate::ProviderBuildError;

/// Public OpenRouteService endpoint.
pub const DEFAULT_ORS_BASE_URL: &str = "https://api.openrouteservice.org";

/// Routing profile used when none is configured.
pub const DEFAULT_PROFILE: &str = "driving-car";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpDirectionsProvider`].
#[derive(Clone)]
pub struct HttpDirectionsProviderConfig {
    /// Base URL for the ORS service.
    pub base_url: String,
    /// API key sent in the `Authorization` header.
    pub api_key: String,
    /// ORS routing profile, e.g. `"driving-car"`.
    pub profile: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for HttpDirectionsProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDirectionsProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("profile", &self.profile)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl HttpDirectionsProviderConfig {
    /// Create a configuration for the public ORS endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_ORS_BASE_URL.to_owned(),
            api_key: api_key.into(),
            profile: DEFAULT_PROFILE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Point the provider at a different ORS deployment.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the routing profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP directions provider using the ORS GeoJSON directions endpoint.
///
/// Alternatives are requested through ORS's `alternative_routes` option.
/// ORS may return fewer alternatives than asked for; every returned feature
/// becomes one candidate, in response order.
#[derive(Debug)]
pub struct HttpDirectionsProvider {
    http: BlockingClient,
    config: HttpDirectionsProviderConfig,
}

impl HttpDirectionsProvider {
    /// Create a provider for the public ORS endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpDirectionsProviderConfig::new(api_key))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpDirectionsProviderConfig) -> Result<Self, ProviderBuildError> {
        let http = BlockingClient::new(&config.user_agent, config.timeout)?;
        Ok(Self { http, config })
    }

    /// `{base_url}/v2/directions/{profile}/geojson`
    fn build_url(&self) -> String {
        format!(
            "{}/v2/directions/{}/geojson",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile
        )
    }

    fn build_body(request: &TripRequest) -> DirectionsRequestBody {
        DirectionsRequestBody {
            coordinates: [
                [request.start.x, request.start.y],
                [request.end.x, request.end.y],
            ],
            alternative_routes: AlternativeRoutes::for_count(request.alternatives),
        }
    }

    async fn fetch_routes_async(
        &self,
        request: &TripRequest,
    ) -> Result<Vec<CandidateRoute>, DirectionsError> {
        let url = self.build_url();
        let body = Self::build_body(request);

        let response = self
            .http
            .client()
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let directions: DirectionsResponse =
            response
                .json()
                .await
                .map_err(|err| DirectionsError::ParseError {
                    message: err.to_string(),
                })?;

        Self::convert_response(directions)
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> DirectionsError {
        match RequestFailure::classify(error) {
            RequestFailure::Timeout => DirectionsError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            },
            RequestFailure::Status(status) => DirectionsError::HttpError {
                url: url.to_owned(),
                status,
                message: error.to_string(),
            },
            RequestFailure::Network(message) => DirectionsError::NetworkError {
                url: url.to_owned(),
                message,
            },
        }
    }

    fn convert_response(
        response: DirectionsResponse,
    ) -> Result<Vec<CandidateRoute>, DirectionsError> {
        if let Some(error) = response.error {
            return Err(DirectionsError::ServiceError {
                code: error
                    .code
                    .map_or_else(|| "unknown".to_owned(), |code| code.to_string()),
                message: error.message,
            });
        }
        Ok(response
            .features
            .into_iter()
            .map(candidate_from_feature)
            .collect())
    }
}

/// Map one GeoJSON feature to a candidate.
///
/// Positions with fewer than two values are skipped. A feature without
/// geometry yields a candidate without geometry, which annotation drops.
fn candidate_from_feature(feature: RouteFeature) -> CandidateRoute {
    let geometry = feature
        .geometry
        .map(|line| {
            line.coordinates
                .iter()
                .filter_map(|position| match position.as_slice() {
                    [x, y, ..] => Some(Coord { x: *x, y: *y }),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();
    let summary = feature.properties.summary;
    CandidateRoute::new(geometry, summary.distance, summary.duration)
}

impl DirectionsProvider for HttpDirectionsProvider {
    /// Fetch alternatives for `request`.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must be
    /// multi-threaded. Inside a `current_thread` runtime the provider falls
    /// back to its own runtime, which blocks the caller's.
    fn candidate_routes(
        &self,
        request: &TripRequest,
    ) -> Result<Vec<CandidateRoute>, DirectionsError> {
        log::debug!(
            "requesting {} route(s) from {}",
            request.alternatives.max(1),
            self.build_url()
        );
        self.http.block_on(self.fetch_routes_async(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::ors::{LineGeometry, RouteProperties, RouteSummary, ServiceErrorBody};
    use rstest::{fixture, rstest};

    #[fixture]
    fn request() -> TripRequest {
        TripRequest::new(Coord { x: 8.681, y: 49.414 }, Coord { x: 8.687, y: 49.420 })
    }

    fn feature(coordinates: Vec<Vec<f64>>, distance: f64, duration: f64) -> RouteFeature {
        RouteFeature {
            geometry: Some(LineGeometry { coordinates }),
            properties: RouteProperties {
                summary: RouteSummary { distance, duration },
            },
        }
    }

    #[rstest]
    fn build_url_includes_profile() {
        let config = HttpDirectionsProviderConfig::new("key")
            .with_base_url("http://ors.example.com/")
            .with_profile("cycling-regular");
        let provider = HttpDirectionsProvider::with_config(config).expect("provider should build");

        assert_eq!(
            provider.build_url(),
            "http://ors.example.com/v2/directions/cycling-regular/geojson"
        );
    }

    #[rstest]
    fn build_body_orders_longitude_first(request: TripRequest) {
        let body = HttpDirectionsProvider::build_body(&request);

        assert_eq!(body.coordinates, [[8.681, 49.414], [8.687, 49.420]]);
        assert_eq!(
            body.alternative_routes.map(|options| options.target_count),
            Some(3)
        );
    }

    #[rstest]
    fn build_body_skips_alternatives_for_single_route(request: TripRequest) {
        let body = HttpDirectionsProvider::build_body(&request.with_alternatives(1));
        assert!(body.alternative_routes.is_none());
    }

    #[rstest]
    fn convert_response_maps_every_feature() {
        let response = DirectionsResponse {
            features: vec![
                feature(vec![vec![8.681, 49.414], vec![8.687, 49.420]], 1_200.0, 180.0),
                feature(vec![vec![8.681, 49.414, 112.0]], 1_450.0, 200.0),
            ],
            error: None,
        };

        let routes = HttpDirectionsProvider::convert_response(response).expect("should convert");

        assert_eq!(routes.len(), 2);
        assert_eq!(
            routes[0].geometry,
            vec![Coord { x: 8.681, y: 49.414 }, Coord { x: 8.687, y: 49.420 }]
        );
        assert_eq!(routes[1].geometry, vec![Coord { x: 8.681, y: 49.414 }]);
        assert_eq!(routes[1].distance_meters, 1_450.0);
        assert_eq!(routes[1].duration_seconds, 200.0);
    }

    #[rstest]
    fn convert_response_keeps_featureless_geometry_empty() {
        let response = DirectionsResponse {
            features: vec![RouteFeature {
                geometry: None,
                properties: RouteProperties::default(),
            }],
            error: None,
        };

        let routes = HttpDirectionsProvider::convert_response(response).expect("should convert");

        assert_eq!(routes.len(), 1);
        assert!(!routes[0].has_geometry());
    }

    #[rstest]
    fn convert_response_skips_short_positions() {
        let response = DirectionsResponse {
            features: vec![feature(vec![vec![8.681], vec![8.687, 49.420]], 10.0, 2.0)],
            error: None,
        };

        let routes = HttpDirectionsProvider::convert_response(response).expect("should convert");

        assert_eq!(routes[0].geometry, vec![Coord { x: 8.687, y: 49.420 }]);
    }

    #[rstest]
    fn convert_response_handles_service_error() {
        let response = DirectionsResponse {
            features: Vec::new(),
            error: Some(ServiceErrorBody {
                code: Some(2010),
                message: "Could not find routable point".to_owned(),
            }),
        };

        let err = HttpDirectionsProvider::convert_response(response).expect_err("should fail");

        assert_eq!(
            err,
            DirectionsError::ServiceError {
                code: "2010".to_owned(),
                message: "Could not find routable point".to_owned(),
            }
        );
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = HttpDirectionsProviderConfig::new("secret")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.base_url, DEFAULT_ORS_BASE_URL);
        assert_eq!(config.profile, DEFAULT_PROFILE);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[rstest]
    fn debug_output_redacts_api_key() {
        let config = HttpDirectionsProviderConfig::new("secret-key");
        assert!(!format!("{config:?}").contains("secret-key"));
    }
}
