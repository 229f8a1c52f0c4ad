//! Logging initialisation for the CLI.
//!
//! Library crates log through the `log` facade; the subscriber installed here
//! picks those records up through its `tracing-log` bridge.

use tracing_subscriber::EnvFilter;

use crate::CliError;

/// Install a stderr subscriber filtered by `RUST_LOG`, or `level` when unset.
pub(crate) fn init(level: &str) -> Result<(), CliError> {
    let filter = filter_for(level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CliError::InitLogging {
            message: err.to_string(),
        })
}

fn filter_for(level: &str) -> Result<EnvFilter, CliError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(level).map_err(|err| CliError::LogFilter {
            level: level.to_owned(),
            message: err.to_string(),
        })
    })
}
