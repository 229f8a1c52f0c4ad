//! JSON file loaders for hazard tables and offline candidate routes.
//!
//! Hazard tables come in two shapes: a bare array of zones, or an object
//! that also overrides the proximity radius.
//!
//! ```json
//! [{"lon": 76.3869, "lat": 30.3398}]
//! {"radius_degrees": 0.02, "zones": [{"lon": 76.3869, "lat": 30.3398}]}
//! ```
//!
//! Candidate route files are an array of
//! `{"geometry": [[lon, lat], ...], "distance": metres, "duration": seconds}`.

use std::io::{self, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use geo::Coord;
use helios_core::{CandidateRoute, HazardZone, HazardZones};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised while loading a hazard table.
#[derive(Debug, Error)]
pub enum HazardTableError {
    /// The file could not be opened.
    #[error("failed to open hazard table at {path:?}: {source}")]
    Open {
        /// Path that was opened.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file is not a valid hazard table document.
    #[error("failed to parse hazard table JSON at {path:?}: {source}")]
    Parse {
        /// Path of the rejected document.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// A zone centre lies outside WGS84 bounds or is not finite.
    #[error("hazard zone {index} in {path:?} has invalid centre ({lon}, {lat})")]
    InvalidZone {
        /// Hazard table path.
        path: Utf8PathBuf,
        /// Position of the zone in the table.
        index: usize,
        /// Offending longitude.
        lon: f64,
        /// Offending latitude.
        lat: f64,
    },
    /// The radius override is negative or not finite.
    #[error("hazard radius {radius} in {path:?} must be a finite, non-negative number of degrees")]
    InvalidRadius {
        /// Hazard table path.
        path: Utf8PathBuf,
        /// Rejected radius in degrees.
        radius: f64,
    },
}

/// Errors raised while loading a candidate-route file.
#[derive(Debug, Error)]
pub enum CandidateRoutesError {
    /// The file could not be opened.
    #[error("failed to open candidate routes at {path:?}: {source}")]
    Open {
        /// Path that was opened.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file is not a valid candidate-route document.
    #[error("failed to parse candidate routes JSON at {path:?}: {source}")]
    Parse {
        /// Path of the rejected document.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct ZoneRecord {
    #[serde(alias = "longitude")]
    lon: f64,
    #[serde(alias = "latitude")]
    lat: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HazardTableDocument {
    Zones(Vec<ZoneRecord>),
    Table {
        radius_degrees: Option<f64>,
        zones: Vec<ZoneRecord>,
    },
}

#[derive(Debug, Deserialize)]
struct CandidateRouteRecord {
    #[serde(default)]
    geometry: Vec<[f64; 2]>,
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

impl From<CandidateRouteRecord> for CandidateRoute {
    fn from(record: CandidateRouteRecord) -> Self {
        let geometry = record
            .geometry
            .into_iter()
            .map(|[x, y]| Coord { x, y })
            .collect();
        Self::new(geometry, record.distance, record.duration)
    }
}

fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

fn read_json<T: DeserializeOwned>(
    path: &Utf8Path,
) -> Result<Result<T, serde_json::Error>, io::Error> {
    let file = open_utf8_file(path)?;
    Ok(serde_json::from_reader(BufReader::new(file)))
}

/// Load a hazard table from `path`.
///
/// # Errors
/// Returns [`HazardTableError`] when the file cannot be read or parsed, a
/// zone centre is outside `[-180, 180] x [-90, 90]`, or the radius override
/// is negative.
pub fn load_hazard_zones(path: &Utf8Path) -> Result<HazardZones, HazardTableError> {
    let document = read_json::<HazardTableDocument>(path)
        .map_err(|source| HazardTableError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .map_err(|source| HazardTableError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let (radius, records) = match document {
        HazardTableDocument::Zones(zones) => (None, zones),
        HazardTableDocument::Table {
            radius_degrees,
            zones,
        } => (radius_degrees, zones),
    };

    let zones = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            if is_valid_position(record.lon, record.lat) {
                Ok(HazardZone::new(record.lon, record.lat))
            } else {
                Err(HazardTableError::InvalidZone {
                    path: path.to_path_buf(),
                    index,
                    lon: record.lon,
                    lat: record.lat,
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    let table = HazardZones::new(zones);

    let Some(radius) = radius else {
        log::debug!("loaded {} hazard zone(s) from {path}", table.len());
        return Ok(table);
    };
    if !radius.is_finite() || radius < 0.0 {
        return Err(HazardTableError::InvalidRadius {
            path: path.to_path_buf(),
            radius,
        });
    }
    log::debug!(
        "loaded {} hazard zone(s) from {path} with radius {radius}",
        table.len()
    );
    Ok(table.with_radius(radius))
}

/// Load candidate routes from `path`, preserving file order.
///
/// Geometry is taken as given; routes with an empty `geometry` array are
/// kept so that annotation can drop them.
///
/// # Errors
/// Returns [`CandidateRoutesError`] when the file cannot be read or parsed.
pub fn load_candidate_routes(path: &Utf8Path) -> Result<Vec<CandidateRoute>, CandidateRoutesError> {
    let records = read_json::<Vec<CandidateRouteRecord>>(path)
        .map_err(|source| CandidateRoutesError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .map_err(|source| CandidateRoutesError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(records.into_iter().map(CandidateRoute::from).collect())
}

fn is_valid_position(lon: f64, lat: f64) -> bool {
    (-180.0..=180.0).contains(&lon) && (-90.0..=90.0).contains(&lat)
}
