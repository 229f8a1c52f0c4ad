//! Error types emitted by the Helios CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use helios_core::{AnnotateError, PolylineError};
use helios_data::{CandidateRoutesError, HazardTableError, ProviderBuildError};
use thiserror::Error;

/// Errors emitted by the Helios CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A required positional argument is missing after configuration merging.
    #[error("missing <{name}> argument (pass it positionally or set {env})")]
    MissingPositional {
        /// Value name shown in usage output.
        name: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A coordinate could not be parsed as `lon,lat`.
    #[error("{value:?} is not a `lon,lat` coordinate pair")]
    MalformedCoordinate {
        /// Text as supplied.
        value: String,
    },
    /// A coordinate is outside WGS84 bounds or not finite.
    #[error("{field} ({longitude}, {latitude}) is outside [-180, 180] x [-90, 90]")]
    InvalidCoordinate {
        /// Option or argument that carried the coordinate.
        field: String,
        /// Supplied longitude.
        longitude: f64,
        /// Supplied latitude.
        latitude: f64,
    },
    /// The polyline argument could not be decoded.
    #[error("failed to decode polyline: {0}")]
    Polyline(#[from] PolylineError),
    /// Loading the hazard table failed.
    #[error(transparent)]
    HazardTable(#[from] HazardTableError),
    /// Loading the candidate-route file failed.
    #[error(transparent)]
    CandidateRoutes(#[from] CandidateRoutesError),
    /// Constructing the directions provider failed.
    #[error("failed to build directions provider for {base_url:?}: {source}")]
    BuildDirectionsProvider {
        /// Configured service root.
        base_url: String,
        /// Construction failure.
        #[source]
        source: ProviderBuildError,
    },
    /// Constructing the weather provider failed.
    #[error("failed to build weather provider for {base_url:?}: {source}")]
    BuildWeatherProvider {
        /// Configured service root.
        base_url: String,
        /// Construction failure.
        #[source]
        source: ProviderBuildError,
    },
    /// Routes could not be fetched or annotated.
    #[error("annotation failed: {0}")]
    Annotate(#[from] AnnotateError),
    /// The log filter directive is invalid.
    #[error("invalid log level {level:?}: {message}")]
    LogFilter {
        /// Directive that failed to parse.
        level: String,
        /// Parser message.
        message: String,
    },
    /// A global logger was already installed.
    #[error("failed to initialise logging: {message}")]
    InitLogging {
        /// Subscriber error message.
        message: String,
    },
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
