//! Compose the risk factors into one raw score per route.

use std::sync::Arc;

use super::factors::{base_metric_score, hazard_multiplier, weather_multiplier};
use crate::{CandidateRoute, HazardZones, WeatherProvider};

/// Compute an unnormalised risk score for a candidate route.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so that routes of
/// one request can be scored concurrently. The method is infallible:
/// optional enrichment that fails must degrade to "no contribution".
///
/// Implementations should return finite, non-negative values.
pub trait RouteScorer: Send + Sync {
    /// Return the raw risk of `route`.
    fn raw_score(&self, route: &CandidateRoute) -> f64;
}

impl<T: RouteScorer + ?Sized> RouteScorer for &T {
    fn raw_score(&self, route: &CandidateRoute) -> f64 {
        (**self).raw_score(route)
    }
}

/// Multipliers applied by the enrichment factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskWeights {
    /// Applied when the route starts in rain, drizzle, a thunderstorm or fog.
    pub adverse_weather_multiplier: f64,
    /// Applied once when the route passes near a hazard zone.
    pub hazard_multiplier: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            adverse_weather_multiplier: 1.5,
            hazard_multiplier: 2.0,
        }
    }
}

/// Default [`RouteScorer`] combining trip metrics, weather and hazards.
///
/// The factors are applied in a fixed order (base, then weather, then
/// hazard) to the same running score so results are reproducible.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use helios_core::test_support::StubWeatherProvider;
/// use helios_core::{CandidateRoute, HazardZones, RiskScorer, RouteScorer, WeatherCondition};
///
/// let route = CandidateRoute::new(vec![Coord { x: 0.0, y: 0.0 }], 1_000.0, 60.0);
/// let dry = RiskScorer::new(
///     StubWeatherProvider::with_condition(WeatherCondition::Clear),
///     HazardZones::empty(),
/// );
/// let wet = RiskScorer::new(
///     StubWeatherProvider::with_condition(WeatherCondition::Rain),
///     HazardZones::empty(),
/// );
///
/// assert!(wet.raw_score(&route) > dry.raw_score(&route));
/// ```
#[derive(Debug)]
pub struct RiskScorer<W>
where
    W: WeatherProvider,
{
    weather: W,
    hazards: Arc<HazardZones>,
    weights: RiskWeights,
}

impl<W> RiskScorer<W>
where
    W: WeatherProvider,
{
    /// Construct a scorer using default weights.
    pub fn new(weather: W, hazards: impl Into<Arc<HazardZones>>) -> Self {
        Self::with_weights(weather, hazards, RiskWeights::default())
    }

    /// Construct a scorer with explicit weights.
    pub fn with_weights(
        weather: W,
        hazards: impl Into<Arc<HazardZones>>,
        weights: RiskWeights,
    ) -> Self {
        Self {
            weather,
            hazards: hazards.into(),
            weights,
        }
    }

    /// Weights applied by this scorer.
    #[must_use]
    pub const fn weights(&self) -> RiskWeights {
        self.weights
    }

    /// Hazard table consulted by this scorer.
    #[must_use]
    pub fn hazards(&self) -> &HazardZones {
        &self.hazards
    }
}

impl<W> RouteScorer for RiskScorer<W>
where
    W: WeatherProvider,
{
    #[expect(
        clippy::float_arithmetic,
        reason = "risk factors scale the running score multiplicatively"
    )]
    fn raw_score(&self, route: &CandidateRoute) -> f64 {
        let mut score = base_metric_score(route);
        score *= weather_multiplier(route, &self.weather, self.weights.adverse_weather_multiplier);
        score *= hazard_multiplier(route, &self.hazards, self.weights.hazard_multiplier);
        score
    }
}
