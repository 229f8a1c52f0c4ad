//! Command-line interface for the Helios route annotation engine.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod annotate;
mod codec;
mod error;
mod logging;
mod route;
mod scoring;

pub use error::CliError;

use annotate::AnnotateArgs;
use codec::{DecodeArgs, EncodeArgs};
use route::RouteArgs;

pub(crate) const ARG_START_LON: &str = "start-lon";
pub(crate) const ARG_START_LAT: &str = "start-lat";
pub(crate) const ARG_END_LON: &str = "end-lon";
pub(crate) const ARG_END_LAT: &str = "end-lat";
pub(crate) const ARG_ORS_API_KEY: &str = "ors-api-key";
pub(crate) const ARG_ROUTES: &str = "path";
pub(crate) const ENV_START_LON: &str = "HELIOS_CMDS_ROUTE_START_LON";
pub(crate) const ENV_START_LAT: &str = "HELIOS_CMDS_ROUTE_START_LAT";
pub(crate) const ENV_END_LON: &str = "HELIOS_CMDS_ROUTE_END_LON";
pub(crate) const ENV_END_LAT: &str = "HELIOS_CMDS_ROUTE_END_LAT";
pub(crate) const ENV_ORS_API_KEY: &str = "HELIOS_CMDS_ROUTE_ORS_API_KEY";
pub(crate) const ENV_ROUTES: &str = "HELIOS_CMDS_ANNOTATE_ROUTES_PATH";

/// Run the Helios CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init(&cli.log_level)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Route(args) => route::run_route(args, writer),
        Command::Annotate(args) => annotate::run_annotate(args, writer),
        Command::Encode(args) => codec::run_encode(&args, writer),
        Command::Decode(args) => codec::run_decode(&args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "helios",
    about = "Annotate driving routes with encoded geometry and comparative risk",
    version
)]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset (e.g. "debug", "helios_core=trace").
    #[arg(long, global = true, value_name = "filter", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch alternatives between two points and annotate them.
    Route(RouteArgs),
    /// Annotate candidate routes stored in a JSON file.
    Annotate(AnnotateArgs),
    /// Encode `lon,lat` points as a polyline.
    Encode(EncodeArgs),
    /// Decode a polyline into `[lon, lat]` points.
    Decode(DecodeArgs),
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    write_line(writer, &payload)
}

pub(crate) fn write_line(writer: &mut dyn Write, line: &str) -> Result<(), CliError> {
    writer
        .write_all(line.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
