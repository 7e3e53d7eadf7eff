//! Core data structures for HURDAT2 processing.
//!
//! Defines the storm header/track-entry aggregate produced by the parser
//! and the landfall event records produced by the classifiers.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Storm metadata parsed from a HURDAT2 header line
///
/// The header ID field packs basin, cyclone number and season year into
/// eight characters (e.g. `AL092021`); the declared entry count announces
/// how many track lines follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StormHeader {
    /// Two-letter basin code (`AL`, `EP`, ...)
    pub basin: String,

    /// Two-digit cyclone number within the season
    pub cyclone_number: String,

    /// Four-digit season year
    pub year: i32,

    /// Storm name, or `UNNAMED` for historical systems
    pub name: String,

    /// Entry count declared by the header; may disagree with the number
    /// of entries actually parsed (mismatches are tolerated)
    pub declared_entries: usize,
}

/// A single best-track fix within one storm
///
/// Entries preserve their source order; the transition and multi-signal
/// classifiers depend on previous/next adjacency within a storm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackEntry {
    /// Observation date
    pub date: NaiveDate,

    /// Observation time (UTC)
    pub time: NaiveTime,

    /// Record indicator; `L` marks a documented landfall fix
    pub indicator: Option<String>,

    /// Storm classification code (`HU`, `TS`, `TD`, ...)
    pub status: String,

    /// Signed latitude in degrees, within [-90, 90]
    pub latitude: f64,

    /// Signed longitude in degrees, within [-180, 180]
    pub longitude: f64,

    /// Maximum sustained wind in knots; 0 when unknown
    pub max_wind_kt: i32,

    /// Minimum central pressure in hPa, when reported
    pub min_pressure_hpa: Option<i32>,

    /// Quadrant wind radii and radius of maximum wind, carried through
    /// opaquely as raw tokens and never interpreted by the classifiers
    pub wind_radii: Vec<String>,
}

impl TrackEntry {
    /// True when the source data flags this fix as a documented landfall
    pub fn has_landfall_indicator(&self) -> bool {
        self.indicator.as_deref() == Some("L")
    }

    /// Coordinate pair as (latitude, longitude)
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// A parsed storm: one header plus its ordered track entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storm {
    pub header: StormHeader,
    pub entries: Vec<TrackEntry>,
}

impl Storm {
    pub fn new(header: StormHeader) -> Self {
        Self {
            header,
            entries: Vec::new(),
        }
    }

    /// Season year from the header
    pub fn year(&self) -> i32 {
        self.header.year
    }

    /// True when the declared entry count matches what was parsed
    pub fn entry_count_matches(&self) -> bool {
        self.header.declared_entries == self.entries.len()
    }
}

/// Diagnostic signals computed by the multi-signal classifier
///
/// Exploratory indicators only: they ride along on the event and never
/// gate whether it qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandfallSignals {
    /// Wind speed dropped by more than the diagnostic ratio vs. the
    /// previous fix
    pub wind_drop: bool,

    /// Central pressure rose by more than the diagnostic threshold vs.
    /// the previous fix
    pub pressure_rise: bool,
}

/// One detected landfall, immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandfallEvent {
    /// Storm name from the header
    pub hurricane: String,

    /// Season year
    pub year: i32,

    /// Date of the qualifying fix
    pub date: NaiveDate,

    /// Time of the qualifying fix (UTC)
    pub time: NaiveTime,

    /// Signed latitude in degrees
    pub latitude: f64,

    /// Signed longitude in degrees
    pub longitude: f64,

    /// Maximum sustained wind in knots
    pub max_wind_kt: i32,

    /// Diagnostic signals, present only for the multi-signal strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signals: Option<LandfallSignals>,
}

impl LandfallEvent {
    /// Build an event from a storm's header and one of its entries
    pub fn from_entry(header: &StormHeader, entry: &TrackEntry) -> Self {
        Self {
            hurricane: header.name.clone(),
            year: header.year,
            date: entry.date,
            time: entry.time,
            latitude: entry.latitude,
            longitude: entry.longitude,
            max_wind_kt: entry.max_wind_kt,
            signals: None,
        }
    }

    /// Attach multi-signal diagnostics to the event
    pub fn with_signals(mut self, signals: LandfallSignals) -> Self {
        self.signals = Some(signals);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(lat: f64, lon: f64, indicator: Option<&str>) -> TrackEntry {
        TrackEntry {
            date: NaiveDate::from_ymd_opt(1992, 8, 24).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            indicator: indicator.map(str::to_string),
            status: "HU".to_string(),
            latitude: lat,
            longitude: lon,
            max_wind_kt: 145,
            min_pressure_hpa: Some(922),
            wind_radii: Vec::new(),
        }
    }

    #[test]
    fn landfall_indicator_detection() {
        assert!(entry(25.4, -80.3, Some("L")).has_landfall_indicator());
        assert!(!entry(25.4, -80.3, Some("W")).has_landfall_indicator());
        assert!(!entry(25.4, -80.3, None).has_landfall_indicator());
    }

    #[test]
    fn entry_count_mismatch_is_observable() {
        let header = StormHeader {
            basin: "AL".to_string(),
            cyclone_number: "04".to_string(),
            year: 1992,
            name: "ANDREW".to_string(),
            declared_entries: 2,
        };
        let mut storm = Storm::new(header);
        storm.entries.push(entry(25.4, -80.3, Some("L")));
        assert!(!storm.entry_count_matches());
        storm.entries.push(entry(25.6, -81.2, None));
        assert!(storm.entry_count_matches());
    }

    #[test]
    fn event_copies_fix_fields() {
        let header = StormHeader {
            basin: "AL".to_string(),
            cyclone_number: "04".to_string(),
            year: 1992,
            name: "ANDREW".to_string(),
            declared_entries: 1,
        };
        let e = entry(25.4, -80.3, Some("L"));
        let event = LandfallEvent::from_entry(&header, &e);
        assert_eq!(event.hurricane, "ANDREW");
        assert_eq!(event.year, 1992);
        assert_eq!(event.latitude, 25.4);
        assert_eq!(event.max_wind_kt, 145);
        assert!(event.signals.is_none());
    }
}
