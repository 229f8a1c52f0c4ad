//! Individual risk factor evaluators.

use crate::{CandidateRoute, HazardZones, WeatherError, WeatherProvider};

/// Multiplier returned by an enrichment factor that does not apply.
const NEUTRAL: f64 = 1.0;

/// Score a route from its distance and duration alone.
///
/// Each metric contributes `ln(1 + value)`. Missing, negative or non-finite
/// metrics contribute nothing, so a route with no metrics scores `0.0`.
///
/// # Examples
/// ```
/// use helios_core::CandidateRoute;
/// use helios_core::risk::base_metric_score;
///
/// let route = CandidateRoute::new(Vec::new(), 0.0, 0.0);
/// assert_eq!(base_metric_score(&route), 0.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "sums logarithmic metric terms")]
pub fn base_metric_score(route: &CandidateRoute) -> f64 {
    log_metric(route.distance_meters) + log_metric(route.duration_seconds)
}

fn log_metric(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value.ln_1p()
    } else {
        0.0
    }
}

/// Look up the weather at the route's first point and return its multiplier.
///
/// Returns `adverse_multiplier` when the provider reports an adverse
/// condition and `1.0` otherwise. Lookup failures are logged and absorbed;
/// they never reach the caller.
pub fn weather_multiplier<W>(route: &CandidateRoute, weather: &W, adverse_multiplier: f64) -> f64
where
    W: WeatherProvider + ?Sized,
{
    let Some(start) = route.first_point() else {
        return NEUTRAL;
    };
    match weather.current_condition(start) {
        Ok(condition) if condition.is_adverse() => {
            log::debug!("adverse weather ({condition}) at {start:?}");
            adverse_multiplier
        }
        Ok(_) | Err(WeatherError::Unconfigured) => NEUTRAL,
        Err(err) => {
            log::warn!("weather lookup at {start:?} failed; scoring without weather: {err}");
            NEUTRAL
        }
    }
}

/// Return `hazard_multiplier` when any route point is near a hazard zone.
///
/// The multiplier is applied once per route however many points or zones
/// match.
#[must_use]
pub fn hazard_multiplier(route: &CandidateRoute, hazards: &HazardZones, multiplier: f64) -> f64 {
    if hazards.touches(&route.geometry) {
        multiplier
    } else {
        NEUTRAL
    }
}
