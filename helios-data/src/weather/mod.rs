//! HTTP weather provider backed by OpenWeatherMap.
//!
//! [`HttpWeatherProvider`] implements [`helios_core::WeatherProvider`] with a
//! single current-weather lookup per call. Failures come back as
//! [`helios_core::WeatherError`] values, which the risk scorer treats as
//! "no weather information".

mod openweather;
mod provider;

pub use provider::{DEFAULT_WEATHER_BASE_URL, HttpWeatherProvider, HttpWeatherProviderConfig};
