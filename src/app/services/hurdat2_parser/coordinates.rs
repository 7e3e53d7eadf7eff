//! Coordinate normalization for HURDAT2 position tokens
//!
//! HURDAT2 encodes positions as `<number><direction>` tokens such as
//! `28.0N` or `94.8W`. This module converts them to signed degrees,
//! unwraps longitudes some historical records express on a 0-360 scale,
//! and rejects anything outside the valid coordinate ranges.

use crate::{Error, Result};

/// Parse a latitude token (`28.0N`, `12.5S`) into signed degrees
pub fn parse_latitude(token: &str) -> Result<f64> {
    let value = parse_directional(token, 'N', 'S')?;

    if !(-90.0..=90.0).contains(&value) {
        return Err(Error::invalid_coordinate(
            token,
            format!("latitude {} outside [-90, 90]", value),
        ));
    }

    Ok(value)
}

/// Parse a longitude token (`80.3W`, `200.0E`) into signed degrees
///
/// Values beyond 180 after signing are artifacts of 0-360 source
/// encodings and are unwrapped by subtracting 360.
pub fn parse_longitude(token: &str) -> Result<f64> {
    let mut value = parse_directional(token, 'E', 'W')?;

    if value > 180.0 {
        value -= 360.0;
    }

    if !(-180.0..=180.0).contains(&value) {
        return Err(Error::invalid_coordinate(
            token,
            format!("longitude {} outside [-180, 180]", value),
        ));
    }

    Ok(value)
}

/// Split a directional token into magnitude and hemisphere sign
fn parse_directional(token: &str, positive: char, negative: char) -> Result<f64> {
    let trimmed = token.trim();

    let Some(direction) = trimmed.chars().last() else {
        return Err(Error::invalid_coordinate(token, "empty token"));
    };

    let sign = if direction == positive {
        1.0
    } else if direction == negative {
        -1.0
    } else {
        return Err(Error::invalid_coordinate(
            token,
            format!(
                "unrecognized direction '{}' (expected {} or {})",
                direction, positive, negative
            ),
        ));
    };

    let magnitude_str = &trimmed[..trimmed.len() - direction.len_utf8()];
    let magnitude: f64 = magnitude_str.parse().map_err(|_| {
        Error::invalid_coordinate(token, format!("non-numeric magnitude '{}'", magnitude_str))
    })?;

    if magnitude < 0.0 {
        return Err(Error::invalid_coordinate(token, "negative magnitude"));
    }

    Ok(sign * magnitude)
}
