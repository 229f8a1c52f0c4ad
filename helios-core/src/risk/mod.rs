//! Raw risk scoring for candidate routes.
//!
//! A raw score starts from the route's trip metrics and is then scaled by
//! optional enrichment factors, always in the same order:
//!
//! 1. [`base_metric_score`]: `ln(1 + distance) + ln(1 + duration)`.
//! 2. [`weather_multiplier`]: adverse weather at the route start.
//! 3. [`hazard_multiplier`]: proximity to a hazard zone, at most once.
//!
//! Raw scores are unbounded and only meaningful relative to other routes in
//! the same request; see [`crate::normalise_scores`].

mod factors;
mod scorer;

pub use factors::{base_metric_score, hazard_multiplier, weather_multiplier};
pub use scorer::{RiskScorer, RiskWeights, RouteScorer};
