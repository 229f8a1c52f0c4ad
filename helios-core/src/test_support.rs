//! Deterministic test doubles for the engine's capability traits.
//!
//! These doubles never touch the network. They are public so that other
//! workspace crates can reuse them in their own tests.

use std::sync::{Mutex, PoisonError};

use geo::Coord;

use crate::{
    CandidateRoute, DirectionsError, DirectionsProvider, RouteScorer, TripRequest,
    WeatherCondition, WeatherError, WeatherProvider,
};

/// Stub `WeatherProvider` returning one pre-configured answer.
///
/// Every coordinate looked up is recorded so tests can assert where the
/// scorer asked for weather.
///
/// # Example
///
/// ```
/// use geo::Coord;
/// use helios_core::test_support::StubWeatherProvider;
/// use helios_core::{WeatherCondition, WeatherProvider};
///
/// let provider = StubWeatherProvider::with_condition(WeatherCondition::Rain);
/// let at = Coord { x: -0.1, y: 51.5 };
///
/// assert_eq!(provider.current_condition(at), Ok(WeatherCondition::Rain));
/// assert_eq!(provider.lookups(), vec![at]);
/// ```
#[derive(Debug)]
pub struct StubWeatherProvider {
    response: Result<WeatherCondition, WeatherError>,
    lookups: Mutex<Vec<Coord<f64>>>,
}

impl StubWeatherProvider {
    /// Create a provider that reports `condition` everywhere.
    #[must_use]
    pub const fn with_condition(condition: WeatherCondition) -> Self {
        Self {
            response: Ok(condition),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider whose every lookup fails with `error`.
    #[must_use]
    pub const fn with_error(error: WeatherError) -> Self {
        Self {
            response: Err(error),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Coordinates looked up so far, in call order.
    #[must_use]
    pub fn lookups(&self) -> Vec<Coord<f64>> {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl WeatherProvider for StubWeatherProvider {
    fn current_condition(&self, at: Coord<f64>) -> Result<WeatherCondition, WeatherError> {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(at);
        self.response.clone()
    }
}

/// Stub `DirectionsProvider` returning pre-configured routes or an error.
#[derive(Debug, Clone)]
pub struct StubDirectionsProvider {
    response: Result<Vec<CandidateRoute>, DirectionsError>,
}

impl StubDirectionsProvider {
    /// Create a provider that returns `routes` for every request.
    #[must_use]
    pub const fn with_routes(routes: Vec<CandidateRoute>) -> Self {
        Self {
            response: Ok(routes),
        }
    }

    /// Create a provider that fails every request with `error`.
    #[must_use]
    pub const fn with_error(error: DirectionsError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl DirectionsProvider for StubDirectionsProvider {
    fn candidate_routes(
        &self,
        _request: &TripRequest,
    ) -> Result<Vec<CandidateRoute>, DirectionsError> {
        self.response.clone()
    }
}

/// Test `RouteScorer` that uses a route's distance as its raw score.
///
/// Lets tests choose raw scores directly through route metrics.
#[derive(Debug, Default, Clone, Copy)]
pub struct DistanceScorer;

impl RouteScorer for DistanceScorer {
    fn raw_score(&self, route: &CandidateRoute) -> f64 {
        route.distance_meters
    }
}
