//! `annotate` command: score candidate routes stored on disk.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use helios_core::annotate_routes;
use helios_data::load_candidate_routes;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::scoring::{ScoringConfig, build_scorer};
use crate::{ARG_ROUTES, CliError, ENV_ROUTES, write_json};

/// CLI arguments for the `annotate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Annotate candidate routes read from a JSON file of \
                 {\"geometry\": [[lon, lat], ...], \"distance\": m, \"duration\": s} \
                 records. Routes without geometry are dropped.",
    about = "Annotate candidate routes from a file"
)]
#[ortho_config(prefix = "HELIOS")]
pub(crate) struct AnnotateArgs {
    /// Path to the candidate-route JSON file.
    #[arg(value_name = ARG_ROUTES)]
    #[serde(default)]
    pub(crate) routes_path: Option<Utf8PathBuf>,
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
    pub(crate) hazard_zones: Option<Utf8PathBuf>,
}

impl AnnotateArgs {
    pub(crate) fn into_config(self) -> Result<AnnotateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AnnotateConfig::try_from(merged)
    }
}

/// Resolved `annotate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnnotateConfig {
    pub(crate) routes_path: Utf8PathBuf,
    pub(crate) scoring: ScoringConfig,
}

impl TryFrom<AnnotateArgs> for AnnotateConfig {
    type Error = CliError;

    fn try_from(args: AnnotateArgs) -> Result<Self, Self::Error> {
        let routes_path = args.routes_path.ok_or(CliError::MissingPositional {
            name: ARG_ROUTES,
            env: ENV_ROUTES,
        })?;
        Ok(Self {
            routes_path,
            scoring: ScoringConfig::from_options(
                args.weather_api_key,
                args.weather_base_url,
                args.weather_timeout_secs,
                args.hazard_zones,
            ),
        })
    }
}

pub(crate) fn run_annotate(args: AnnotateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let routes = load_candidate_routes(&config.routes_path)?;
    let scorer = build_scorer(&config.scoring)?;
    let annotated = annotate_routes(&routes, &scorer)?;
    write_json(writer, &annotated)
}
