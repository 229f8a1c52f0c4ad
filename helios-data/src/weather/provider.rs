//! `WeatherProvider` over the OpenWeatherMap current-weather API.

use std::error::Error as _;
use std::time::Duration;

use geo::Coord;
use helios_core::{WeatherCondition, WeatherError, WeatherProvider};

use super::openweather::CurrentWeatherResponse;
use crate::blocking::{BlockingClient, DEFAULT_USER_AGENT, RequestFailure};
use crate::ProviderBuildError;

/// Public OpenWeatherMap endpoint.
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org";

/// Weather lookups sit on the scoring path, so the default timeout is short.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for [`HttpWeatherProvider`].
#[derive(Clone)]
pub struct HttpWeatherProviderConfig {
    /// Base URL for the weather service.
    pub base_url: String,
    /// API key sent as the `appid` query parameter.
    pub api_key: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for HttpWeatherProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpWeatherProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl HttpWeatherProviderConfig {
    /// Create a configuration for the public endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_WEATHER_BASE_URL.to_owned(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Point the provider at a different deployment.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
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

/// HTTP weather provider reporting the current condition at a point.
#[derive(Debug)]
pub struct HttpWeatherProvider {
    http: BlockingClient,
    config: HttpWeatherProviderConfig,
}

impl HttpWeatherProvider {
    /// Create a provider for the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpWeatherProviderConfig::new(api_key))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpWeatherProviderConfig) -> Result<Self, ProviderBuildError> {
        let http = BlockingClient::new(&config.user_agent, config.timeout)?;
        Ok(Self { http, config })
    }

    /// Endpoint without query parameters; safe to put in error messages.
    fn endpoint(&self) -> String {
        format!(
            "{}/data/2.5/weather",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn query(&self, at: Coord<f64>) -> [(&'static str, String); 3] {
        [
            ("lat", at.y.to_string()),
            ("lon", at.x.to_string()),
            ("appid", self.config.api_key.clone()),
        ]
    }

    async fn fetch_condition_async(&self, at: Coord<f64>) -> Result<WeatherCondition, WeatherError> {
        let url = self.endpoint();

        let response = self
            .http
            .client()
            .get(&url)
            .query(&self.query(at))
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let weather: CurrentWeatherResponse =
            response
                .json()
                .await
                .map_err(|err| WeatherError::ParseError {
                    message: err.without_url().to_string(),
                })?;

        Self::convert_response(weather)
    }

    /// Build a `WeatherError`, stripping the request URL (which carries the
    /// API key) from the underlying message.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> WeatherError {
        match RequestFailure::classify(error) {
            RequestFailure::Timeout => WeatherError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            },
            RequestFailure::Status(status) => WeatherError::HttpError {
                url: url.to_owned(),
                status,
                message: error
                    .status()
                    .and_then(|code| code.canonical_reason())
                    .unwrap_or("unexpected status")
                    .to_owned(),
            },
            RequestFailure::Network(_) => WeatherError::NetworkError {
                url: url.to_owned(),
                message: redacted_message(error),
            },
        }
    }

    fn convert_response(response: CurrentWeatherResponse) -> Result<WeatherCondition, WeatherError> {
        response
            .weather
            .into_iter()
            .next()
            .map(|entry| WeatherCondition::from(entry.main.as_str()))
            .ok_or(WeatherError::MissingCondition)
    }
}

fn redacted_message(error: &reqwest::Error) -> String {
    let mut message = String::from("request failed");
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl WeatherProvider for HttpWeatherProvider {
    fn current_condition(&self, at: Coord<f64>) -> Result<WeatherCondition, WeatherError> {
        self.http.block_on(self.fetch_condition_async(at))
    }
}
