//! HURDAT2 track entry line parsing
//!
//! Entry lines carry one best-track fix with a fixed positional schema:
//!
//! ```text
//! 20210829, 1655, L, HU, 29.1N,  90.2W, 130,  931, 130, ...
//! ```
//!
//! Date, time, record indicator, status, position, maximum wind and
//! minimum pressure are parsed; the remaining wind-radii fields are
//! carried through as opaque tokens.

use chrono::{NaiveDate, NaiveTime};

use super::coordinates::{parse_latitude, parse_longitude};
use crate::app::models::TrackEntry;
use crate::constants::entry_fields;
use crate::{Error, Result};

/// Parse a split entry line into a [`TrackEntry`]
///
/// Any field-level failure (bad date, malformed coordinate token,
/// out-of-range position) discards only this entry; the caller keeps the
/// current storm and continues scanning.
pub fn parse_entry(fields: &[&str], line_number: usize) -> Result<TrackEntry> {
    let date = NaiveDate::parse_from_str(fields[entry_fields::DATE], "%Y%m%d").map_err(|e| {
        Error::malformed_entry(
            line_number,
            format!("invalid date '{}': {}", fields[entry_fields::DATE], e),
        )
    })?;

    let time = NaiveTime::parse_from_str(fields[entry_fields::TIME], "%H%M").map_err(|e| {
        Error::malformed_entry(
            line_number,
            format!("invalid time '{}': {}", fields[entry_fields::TIME], e),
        )
    })?;

    let indicator = match fields[entry_fields::INDICATOR] {
        "" => None,
        value => Some(value.to_string()),
    };

    let status = fields[entry_fields::STATUS].to_string();

    let latitude = parse_latitude(fields[entry_fields::LATITUDE])?;
    let longitude = parse_longitude(fields[entry_fields::LONGITUDE])?;

    // Missing winds appear as sentinels like -99; treat anything that is
    // not a non-negative integer as unknown (0), matching the dataset's
    // "0 if unknown" convention.
    let max_wind_kt = fields[entry_fields::MAX_WIND]
        .parse::<i32>()
        .ok()
        .filter(|w| *w >= 0)
        .unwrap_or(0);

    // Pressure sentinel is -999; only positive readings are meaningful.
    let min_pressure_hpa = fields
        .get(entry_fields::MIN_PRESSURE)
        .and_then(|p| p.parse::<i32>().ok())
        .filter(|p| *p > 0);

    let wind_radii = fields
        .get(entry_fields::RADII_START..)
        .unwrap_or_default()
        .iter()
        .map(|f| f.to_string())
        .collect();

    Ok(TrackEntry {
        date,
        time,
        indicator,
        status,
        latitude,
        longitude,
        max_wind_kt,
        min_pressure_hpa,
        wind_radii,
    })
}
