//! Directions provider trait and trip request type.

use geo::Coord;

use super::DirectionsError;
use crate::CandidateRoute;

/// Endpoints of a single trip and how many alternatives to ask for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripRequest {
    /// Departure point (`x = longitude`, `y = latitude`).
    pub start: Coord<f64>,
    /// Destination point (`x = longitude`, `y = latitude`).
    pub end: Coord<f64>,
    /// Upper bound on the number of alternative routes requested.
    pub alternatives: u8,
}

impl TripRequest {
    /// Default number of alternatives requested per trip.
    pub const DEFAULT_ALTERNATIVES: u8 = 3;

    /// Construct a request for the default number of alternatives.
    #[must_use]
    pub const fn new(start: Coord<f64>, end: Coord<f64>) -> Self {
        Self {
            start,
            end,
            alternatives: Self::DEFAULT_ALTERNATIVES,
        }
    }

    /// Set the number of alternatives to request.
    #[must_use]
    pub const fn with_alternatives(mut self, alternatives: u8) -> Self {
        self.alternatives = alternatives;
        self
    }
}

/// Fetch alternative routes for a trip.
///
/// Implementations may return an empty list; deciding whether that is fatal
/// is left to the caller.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use helios_core::{CandidateRoute, DirectionsError, DirectionsProvider, TripRequest};
///
/// struct StraightLine;
///
/// impl DirectionsProvider for StraightLine {
///     fn candidate_routes(
///         &self,
///         request: &TripRequest,
///     ) -> Result<Vec<CandidateRoute>, DirectionsError> {
///         Ok(vec![CandidateRoute::new(vec![request.start, request.end], 1_000.0, 90.0)])
///     }
/// }
///
/// let request = TripRequest::new(Coord { x: 76.38, y: 30.33 }, Coord { x: 76.40, y: 30.35 });
/// let routes = StraightLine.candidate_routes(&request)?;
/// assert_eq!(routes.len(), 1);
/// # Ok::<(), DirectionsError>(())
/// ```
pub trait DirectionsProvider {
    /// Return candidate routes for `request`, best first.
    ///
    /// # Errors
    /// Returns [`DirectionsError`] when the routing service cannot be
    /// reached or its answer cannot be used.
    fn candidate_routes(&self, request: &TripRequest)
    -> Result<Vec<CandidateRoute>, DirectionsError>;
}

impl<T: DirectionsProvider + ?Sized> DirectionsProvider for &T {
    fn candidate_routes(
        &self,
        request: &TripRequest,
    ) -> Result<Vec<CandidateRoute>, DirectionsError> {
        (**self).candidate_routes(request)
    }
}
