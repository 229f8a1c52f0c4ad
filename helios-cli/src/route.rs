//! `route` command: fetch alternatives between two points and annotate them.

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use geo::Coord;
use helios_core::{AnnotationPipeline, DirectionsProvider, TripRequest};
use helios_data::routing::{
    DEFAULT_ORS_BASE_URL, DEFAULT_PROFILE, HttpDirectionsProvider, HttpDirectionsProviderConfig,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::codec::validate_coordinate;
use crate::scoring::{ScoringConfig, build_scorer};
use crate::{
    ARG_END_LAT, ARG_END_LON, ARG_ORS_API_KEY, ARG_START_LAT, ARG_START_LON, CliError,
    ENV_END_LAT, ENV_END_LON, ENV_ORS_API_KEY, ENV_START_LAT, ENV_START_LON, write_json,
};

/// Default directions request timeout in seconds.
const DEFAULT_DIRECTIONS_TIMEOUT_SECS: u64 = 30;

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Request alternative driving routes from OpenRouteService, \
                 score each one for risk and print the annotated routes as \
                 JSON. Options can come from CLI flags, configuration files, \
                 or environment variables.",
    about = "Fetch and annotate alternatives between two points"
)]
#[ortho_config(prefix = "HELIOS")]
pub(crate) struct RouteArgs {
    /// Start longitude in degrees.
    #[arg(long = ARG_START_LON, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) start_lon: Option<f64>,
    /// Start latitude in degrees.
    #[arg(long = ARG_START_LAT, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) start_lat: Option<f64>,
    /// End longitude in degrees.
    #[arg(long = ARG_END_LON, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) end_lon: Option<f64>,
    /// End latitude in degrees.
    #[arg(long = ARG_END_LAT, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) end_lat: Option<f64>,
    /// Number of alternatives to request (default 3).
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) alternatives: Option<u8>,
    /// OpenRouteService API key.
    #[arg(long = ARG_ORS_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) ors_api_key: Option<String>,
    /// Base URL for OpenRouteService.
    #[arg(long, value_name = "url")]
    #[serde(default)]
    pub(crate) ors_base_url: Option<String>,
    /// ORS routing profile (default "driving-car").
    #[arg(long, value_name = "profile")]
    #[serde(default)]
    pub(crate) profile: Option<String>,
    /// OpenWeatherMap API key; weather enrichment is off without one.
    #[arg(long, value_name = "key")]
    #[serde(default)]
    pub(crate) weather_api_key: Option<String>,
    /// Base URL for the weather service.
    #[arg(long, value_name = "url")]
    #[serde(default)]
    pub(crate) weather_base_url: Option<String>,
    /// Weather lookup timeout in seconds (default 5).
    #[arg(long, value_name = "secs")]
    #[serde(default)]
    pub(crate) weather_timeout_secs: Option<u64>,
    /// JSON hazard table replacing the built-in one.
    #[arg(long, value_name = "path")]
    #[serde(default)]
    pub(crate) hazard_zones: Option<camino::Utf8PathBuf>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    pub(crate) request: TripRequest,
    pub(crate) ors_api_key: String,
    pub(crate) ors_base_url: String,
    pub(crate) profile: String,
    pub(crate) scoring: ScoringConfig,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let start = Coord {
            x: args.start_lon.ok_or(CliError::MissingArgument {
                field: ARG_START_LON,
                env: ENV_START_LON,
            })?,
            y: args.start_lat.ok_or(CliError::MissingArgument {
                field: ARG_START_LAT,
                env: ENV_START_LAT,
            })?,
        };
        let end = Coord {
            x: args.end_lon.ok_or(CliError::MissingArgument {
                field: ARG_END_LON,
                env: ENV_END_LON,
            })?,
            y: args.end_lat.ok_or(CliError::MissingArgument {
                field: ARG_END_LAT,
                env: ENV_END_LAT,
            })?,
        };
        validate_coordinate("start", start)?;
        validate_coordinate("end", end)?;

        let ors_api_key = args.ors_api_key.ok_or(CliError::MissingArgument {
            field: ARG_ORS_API_KEY,
            env: ENV_ORS_API_KEY,
        })?;
        let request = TripRequest::new(start, end)
            .with_alternatives(args.alternatives.unwrap_or(TripRequest::DEFAULT_ALTERNATIVES));

        Ok(Self {
            request,
            ors_api_key,
            ors_base_url: args
                .ors_base_url
                .unwrap_or_else(|| DEFAULT_ORS_BASE_URL.to_owned()),
            profile: args.profile.unwrap_or_else(|| DEFAULT_PROFILE.to_owned()),
            scoring: ScoringConfig::from_options(
                args.weather_api_key,
                args.weather_base_url,
                args.weather_timeout_secs,
                args.hazard_zones,
            ),
        })
    }
}

/// Builds the directions provider for a `route` invocation.
pub(crate) trait DirectionsBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn DirectionsProvider>, CliError>;
}

pub(crate) struct HttpDirectionsBuilder;

impl DirectionsBuilder for HttpDirectionsBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn DirectionsProvider>, CliError> {
        let provider_config = HttpDirectionsProviderConfig::new(config.ors_api_key.clone())
            .with_base_url(config.ors_base_url.clone())
            .with_profile(config.profile.clone())
            .with_timeout(Duration::from_secs(DEFAULT_DIRECTIONS_TIMEOUT_SECS));
        let provider = HttpDirectionsProvider::with_config(provider_config).map_err(|source| {
            CliError::BuildDirectionsProvider {
                base_url: config.ors_base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(provider))
    }
}

pub(crate) fn run_route(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_route_with(args, &HttpDirectionsBuilder, writer)
}

pub(crate) fn run_route_with(
    args: RouteArgs,
    builder: &dyn DirectionsBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let directions = builder.build(&config)?;
    let scorer = build_scorer(&config.scoring)?;
    let pipeline = AnnotationPipeline::new(directions.as_ref(), scorer);
    let annotated = pipeline.run(&config.request)?;
    write_json(writer, &annotated)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
