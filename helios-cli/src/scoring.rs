//! Scorer assembly shared by the `route` and `annotate` commands.

use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use helios_core::{HazardZones, NoWeather, RiskScorer, WeatherProvider};
use helios_data::load_hazard_zones;
use helios_data::weather::{
    DEFAULT_WEATHER_BASE_URL, HttpWeatherProvider, HttpWeatherProviderConfig,
};

use crate::CliError;

/// Default weather lookup timeout in seconds.
pub(crate) const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 5;

/// Scorer type built for CLI commands.
pub(crate) type CliScorer = RiskScorer<Box<dyn WeatherProvider>>;

/// Resolved weather settings; present only when an API key is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WeatherSettings {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) timeout_secs: u64,
}

/// Resolved scoring configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ScoringConfig {
    pub(crate) weather: Option<WeatherSettings>,
    pub(crate) hazard_zones: Option<Utf8PathBuf>,
}

impl ScoringConfig {
    /// Merge optional weather and hazard options into a configuration.
    ///
    /// Weather enrichment is enabled only when `api_key` is set.
    pub(crate) fn from_options(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
        hazard_zones: Option<Utf8PathBuf>,
    ) -> Self {
        let weather = api_key.map(|key| WeatherSettings {
            api_key: key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_owned()),
            timeout_secs: timeout_secs.unwrap_or(DEFAULT_WEATHER_TIMEOUT_SECS),
        });
        Self {
            weather,
            hazard_zones,
        }
    }
}

/// Build the risk scorer described by `config`.
pub(crate) fn build_scorer(config: &ScoringConfig) -> Result<CliScorer, CliError> {
    let hazards = load_hazards(config.hazard_zones.as_deref())?;
    let weather = build_weather(config.weather.as_ref())?;
    Ok(RiskScorer::new(weather, hazards))
}

fn load_hazards(path: Option<&Utf8Path>) -> Result<HazardZones, CliError> {
    path.map_or_else(
        || Ok(HazardZones::builtin()),
        |table| load_hazard_zones(table).map_err(CliError::from),
    )
}

fn build_weather(
    configured: Option<&WeatherSettings>,
) -> Result<Box<dyn WeatherProvider>, CliError> {
    let Some(settings) = configured else {
        return Ok(Box::new(NoWeather));
    };
    let config = HttpWeatherProviderConfig::new(settings.api_key.clone())
        .with_base_url(settings.base_url.clone())
        .with_timeout(Duration::from_secs(settings.timeout_secs));
    let provider =
        HttpWeatherProvider::with_config(config).map_err(|source| CliError::BuildWeatherProvider {
            base_url: settings.base_url.clone(),
            source,
        })?;
    Ok(Box::new(provider))
}
