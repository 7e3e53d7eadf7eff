//! Shared fixtures for classifier tests
//!
//! Tests run against a synthetic square "land" region from (0, 0) to
//! (10, 10) in lon/lat space, so membership and distances are easy to
//! reason about: one degree is roughly 69 statute miles.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use geo::{LineString, MultiPolygon, Polygon};

use crate::app::models::{Storm, StormHeader, TrackEntry};
use crate::app::services::region::RegionBoundary;

mod geometric_tests;

/// Square land region with the default 0.05 degree buffer
pub fn square_region() -> Arc<RegionBoundary> {
    let square = Polygon::new(
        LineString::from(vec![
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]),
        vec![],
    );
    Arc::new(RegionBoundary::new("Square", MultiPolygon(vec![square]), None, 0.05).unwrap())
}

/// Build a storm for a given season year from (lat, lon, wind, indicator)
pub fn storm(year: i32, fixes: &[(f64, f64, i32, Option<&str>)]) -> Storm {
    storm_with_pressure(
        year,
        &fixes
            .iter()
            .map(|&(lat, lon, wind, ind)| (lat, lon, wind, None, ind))
            .collect::<Vec<_>>(),
    )
}

/// Build a storm with explicit pressures
pub fn storm_with_pressure(
    year: i32,
    fixes: &[(f64, f64, i32, Option<i32>, Option<&str>)],
) -> Storm {
    let header = StormHeader {
        basin: "AL".to_string(),
        cyclone_number: "01".to_string(),
        year,
        name: "TEST".to_string(),
        declared_entries: fixes.len(),
    };

    let entries = fixes
        .iter()
        .enumerate()
        .map(|(i, &(lat, lon, wind, pressure, indicator))| TrackEntry {
            date: NaiveDate::from_ymd_opt(year, 9, 1).unwrap(),
            time: NaiveTime::from_hms_opt(i as u32 % 24, 0, 0).unwrap(),
            indicator: indicator.map(str::to_string),
            status: "HU".to_string(),
            latitude: lat,
            longitude: lon,
            max_wind_kt: wind,
            min_pressure_hpa: pressure,
            wind_radii: Vec::new(),
        })
        .collect();

    Storm { header, entries }
}
