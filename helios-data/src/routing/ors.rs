//! OpenRouteService directions request and GeoJSON response types.
//!
//! See: <https://openrouteservice.org/dev/#/api-docs/v2/directions/{profile}/geojson/post>

use serde::{Deserialize, Serialize};

/// Share factor requested for alternative routes.
const SHARE_FACTOR: f64 = 0.6;
/// Weight factor requested for alternative routes.
const WEIGHT_FACTOR: f64 = 1.4;

/// JSON body for a directions request.
#[derive(Debug, Serialize)]
pub struct DirectionsRequestBody {
    /// Start and end as `[longitude, latitude]`.
    pub coordinates: [[f64; 2]; 2],
    /// Present only when more than one route is wanted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_routes: Option<AlternativeRoutes>,
}

/// Alternative-route options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeRoutes {
    pub target_count: u8,
    pub share_factor: f64,
    pub weight_factor: f64,
}

impl AlternativeRoutes {
    /// Options for `target_count` routes, or `None` when at most one is wanted.
    pub const fn for_count(target_count: u8) -> Option<Self> {
        if target_count > 1 {
            Some(Self {
                target_count,
                share_factor: SHARE_FACTOR,
                weight_factor: WEIGHT_FACTOR,
            })
        } else {
            None
        }
    }
}

/// GeoJSON feature collection returned on success, or an error object.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub features: Vec<RouteFeature>,
    pub error: Option<ServiceErrorBody>,
}

/// Error object embedded in a directions response.
#[derive(Debug, Deserialize)]
pub struct ServiceErrorBody {
    pub code: Option<u32>,
    #[serde(default)]
    pub message: String,
}

/// One alternative route.
#[derive(Debug, Deserialize)]
pub struct RouteFeature {
    pub geometry: Option<LineGeometry>,
    #[serde(default)]
    pub properties: RouteProperties,
}

/// GeoJSON `LineString` geometry.
///
/// Positions may carry a third elevation value, which is ignored.
#[derive(Debug, Deserialize)]
pub struct LineGeometry {
    #[serde(default)]
    pub coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RouteProperties {
    #[serde(default)]
    pub summary: RouteSummary,
}

/// Route totals. ORS omits both fields for zero-length routes.
#[derive(Debug, Default, Deserialize)]
pub struct RouteSummary {
    /// Metres.
    #[serde(default)]
    pub distance: f64,
    /// Seconds.
    #[serde(default)]
    pub duration: f64,
}
