//! Encoded polyline codec at 1e-5 degree precision.
//!
//! Coordinates are rounded to five decimal places, turned into signed deltas
//! from the previous point, zig-zag mapped to unsigned integers and written
//! as 5-bit little-endian chunks offset into printable ASCII. Latitude is
//! emitted before longitude for every point, matching the widely used
//! encoded polyline format.
//!
//! # Examples
//! ```
//! use geo::Coord;
//! use helios_core::polyline::{decode, encode};
//!
//! let points = vec![
//!     Coord { x: -120.2, y: 38.5 },
//!     Coord { x: -120.95, y: 40.7 },
//!     Coord { x: -126.453, y: 43.252 },
//! ];
//! let encoded = encode(&points);
//! assert_eq!(encoded, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
//! assert_eq!(decode(&encoded)?, points);
//! # Ok::<(), helios_core::PolylineError>(())
//! ```

use geo::Coord;
use thiserror::Error;

const PRECISION: f64 = 1e5;
const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u64 = 0x1f;
const CONTINUATION: u64 = 0x20;
const ASCII_OFFSET: u8 = 63;
/// Largest shift that still leaves room for a whole chunk in a `u64`.
const MAX_SHIFT: u32 = 60;

/// Errors returned by [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// A byte outside the encoding alphabet was found.
    #[error("invalid polyline character {character:?} at byte {index}")]
    InvalidCharacter {
        /// Byte offset of the offending character.
        index: usize,
        /// The character that was read.
        character: char,
    },
    /// The input ended in the middle of a value or after a lone latitude.
    #[error("polyline ends mid-coordinate at byte {index}")]
    Truncated {
        /// Byte offset at which more input was expected.
        index: usize,
    },
    /// A value used more chunks than fit in 64 bits, or adding it to the
    /// running coordinate overflowed.
    #[error("polyline value starting at byte {index} overflows")]
    Overflow {
        /// Byte offset at which the oversized value starts.
        index: usize,
    },
}

/// Encode `points` as a polyline string.
///
/// An empty slice encodes to an empty string. The first point is encoded as
/// a delta from `(0, 0)`. Deltas saturate for coordinates far outside WGS84
/// bounds.
#[must_use]
pub fn encode(points: &[Coord<f64>]) -> String {
    let mut output = String::with_capacity(points.len() * 8);
    let mut previous = (0_i64, 0_i64);
    for point in points {
        let current = (to_e5(point.y), to_e5(point.x));
        write_value(current.0.saturating_sub(previous.0), &mut output);
        write_value(current.1.saturating_sub(previous.1), &mut output);
        previous = current;
    }
    output
}

/// Decode a polyline string back into `(longitude, latitude)` points.
///
/// The result reproduces the encoded coordinates at 1e-5 degree precision.
///
/// # Errors
/// Returns [`PolylineError`] when the input contains characters outside the
/// encoding alphabet, stops part-way through a coordinate, or contains a
/// value too large to represent.
pub fn decode(encoded: &str) -> Result<Vec<Coord<f64>>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0_usize;
    let mut latitude = 0_i64;
    let mut longitude = 0_i64;
    while index < bytes.len() {
        let (lat_delta, next) = read_value(bytes, index)?;
        if next >= bytes.len() {
            return Err(PolylineError::Truncated { index: next });
        }
        let (lng_delta, after) = read_value(bytes, next)?;
        latitude = latitude
            .checked_add(lat_delta)
            .ok_or(PolylineError::Overflow { index })?;
        longitude = longitude
            .checked_add(lng_delta)
            .ok_or(PolylineError::Overflow { index: next })?;
        points.push(Coord {
            x: from_e5(longitude),
            y: from_e5(latitude),
        });
        index = after;
    }
    Ok(points)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "coordinates are scaled to integer hundred-thousandths of a degree"
)]
fn to_e5(degrees: f64) -> i64 {
    (degrees * PRECISION).round() as i64
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "hundred-thousandths of a degree fit exactly in an f64 mantissa"
)]
fn from_e5(value: i64) -> f64 {
    value as f64 / PRECISION
}

const fn zigzag(value: i64) -> u64 {
    let shifted = value << 1;
    let mapped = if value < 0 { !shifted } else { shifted };
    mapped.cast_unsigned()
}

const fn unzigzag(value: u64) -> i64 {
    let magnitude = (value >> 1).cast_signed();
    if value & 1 == 1 { !magnitude } else { magnitude }
}

fn write_value(delta: i64, output: &mut String) {
    let mut value = zigzag(delta);
    while value >= CONTINUATION {
        output.push(chunk_char((value & CHUNK_MASK) | CONTINUATION));
        value >>= CHUNK_BITS;
    }
    output.push(chunk_char(value));
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "chunks are masked to six bits before narrowing"
)]
fn chunk_char(chunk: u64) -> char {
    char::from((chunk & 0x3f) as u8 + ASCII_OFFSET)
}

/// Read one zig-zag value starting at `start`, returning it with the index
/// of the first byte after it.
fn read_value(bytes: &[u8], start: usize) -> Result<(i64, usize), PolylineError> {
    let mut result = 0_u64;
    let mut shift = 0_u32;
    let mut index = start;
    loop {
        let Some(&byte) = bytes.get(index) else {
            return Err(PolylineError::Truncated { index });
        };
        let chunk = chunk_value(byte).ok_or(PolylineError::InvalidCharacter {
            index,
            character: char::from(byte),
        })?;
        if shift > MAX_SHIFT {
            return Err(PolylineError::Overflow { index: start });
        }
        result |= (chunk & CHUNK_MASK) << shift;
        shift += CHUNK_BITS;
        index += 1;
        if chunk < CONTINUATION {
            return Ok((unzigzag(result), index));
        }
    }
}

fn chunk_value(byte: u8) -> Option<u64> {
    match byte {
        63..=126 => Some(u64::from(byte - ASCII_OFFSET)),
        _ => None,
    }
}
