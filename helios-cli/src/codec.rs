//! `encode` and `decode` commands plus coordinate parsing helpers.

use std::io::Write;

use clap::Parser;
use geo::Coord;
use helios_core::polyline;

use crate::{CliError, write_json, write_line};

/// CLI arguments for the `encode` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(about = "Encode points as a polyline")]
pub(crate) struct EncodeArgs {
    /// Points as `lon,lat`, in travel order.
    #[arg(value_name = "lon,lat", required = true, allow_hyphen_values = true)]
    pub(crate) points: Vec<String>,
}

/// CLI arguments for the `decode` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(about = "Decode a polyline into points")]
pub(crate) struct DecodeArgs {
    /// Encoded polyline.
    #[arg(value_name = "polyline")]
    pub(crate) polyline: String,
}

pub(crate) fn run_encode(args: &EncodeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let points = args
        .points
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let point = parse_coordinate(value)?;
            validate_coordinate(&format!("point {index}"), point)?;
            Ok(point)
        })
        .collect::<Result<Vec<_>, CliError>>()?;
    write_line(writer, &polyline::encode(&points))
}

pub(crate) fn run_decode(args: &DecodeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let points = polyline::decode(args.polyline.trim())?;
    let pairs: Vec<[f64; 2]> = points.iter().map(|point| [point.x, point.y]).collect();
    write_json(writer, &pairs)
}

/// Parse `"lon,lat"` into a coordinate.
pub(crate) fn parse_coordinate(value: &str) -> Result<Coord<f64>, CliError> {
    let malformed = || CliError::MalformedCoordinate {
        value: value.to_owned(),
    };
    let (lon, lat) = value.split_once(',').ok_or_else(malformed)?;
    let x = lon.trim().parse::<f64>().map_err(|_| malformed())?;
    let y = lat.trim().parse::<f64>().map_err(|_| malformed())?;
    Ok(Coord { x, y })
}

/// Reject coordinates outside WGS84 bounds.
///
/// The core accepts any coordinate, so input from users is checked here.
pub(crate) fn validate_coordinate(field: &str, point: Coord<f64>) -> Result<(), CliError> {
    let in_bounds = (-180.0..=180.0).contains(&point.x) && (-90.0..=90.0).contains(&point.y);
    if in_bounds {
        Ok(())
    } else {
        Err(CliError::InvalidCoordinate {
            field: field.to_owned(),
            longitude: point.x,
            latitude: point.y,
        })
    }
}
