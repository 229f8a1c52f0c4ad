//! Candidate and annotated driving routes.
//!
//! A [`CandidateRoute`] is what the directions collaborator hands over for a
//! single alternative; an [`AnnotatedRoute`] is the only value this crate
//! exposes back to callers.

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One alternative route returned by a directions provider.
///
/// Geometry is WGS84 with `x = longitude` and `y = latitude`, in travel
/// order. Metrics are taken as supplied; the core does not validate them.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use helios_core::CandidateRoute;
///
/// let route = CandidateRoute::new(vec![Coord { x: 76.38, y: 30.33 }], 850.0, 120.0);
///
/// assert!(route.has_geometry());
/// assert_eq!(route.first_point(), Some(Coord { x: 76.38, y: 30.33 }));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CandidateRoute {
    /// Ordered `(longitude, latitude)` points along the route.
    pub geometry: Vec<Coord<f64>>,
    /// Total driving distance in metres.
    pub distance_meters: f64,
    /// Total driving time in seconds.
    pub duration_seconds: f64,
}

impl CandidateRoute {
    /// Construct a route from its geometry and trip metrics.
    #[must_use]
    pub const fn new(geometry: Vec<Coord<f64>>, distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            geometry,
            distance_meters,
            duration_seconds,
        }
    }

    /// Report whether the route carries at least one point.
    #[must_use]
    pub fn has_geometry(&self) -> bool {
        !self.geometry.is_empty()
    }

    /// Return the first point of the route, if any.
    #[must_use]
    pub fn first_point(&self) -> Option<Coord<f64>> {
        self.geometry.first().copied()
    }
}

/// A route ready to be returned to the caller.
///
/// `risk_score` lies in `1.0..=10.0` and is only comparable with the other
/// routes annotated for the same request.
///
/// With the `serde` feature the record serialises as
/// `{"polyline": "...", "risk_score": 4.2}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotatedRoute {
    /// Geometry compressed with [`crate::polyline::encode`].
    #[cfg_attr(feature = "serde", serde(rename = "polyline"))]
    pub encoded_geometry: String,
    /// Normalised comparative risk.
    pub risk_score: f64,
}
