//! Look up current weather near a coordinate.
//!
//! The [`WeatherProvider`] trait is the single seam through which live
//! weather enters route scoring. Lookups are optional enrichment: callers
//! treat every [`WeatherError`] as "no information" rather than a failure.

mod condition;
mod error;
mod provider;

pub use condition::WeatherCondition;
pub use error::WeatherError;
pub use provider::{NoWeather, WeatherProvider};
