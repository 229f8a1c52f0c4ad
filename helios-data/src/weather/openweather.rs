//! OpenWeatherMap current-weather response types.
//!
//! See: <https://openweathermap.org/current>

use serde::Deserialize;

/// Current weather at one location.
///
/// Only the condition groups are read; the rest of the payload is ignored.
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    /// Condition groups, most significant first.
    #[serde(default)]
    pub weather: Vec<WeatherEntry>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherEntry {
    /// Condition group keyword such as `"Rain"` or `"Clouds"`.
    pub main: String,
}
