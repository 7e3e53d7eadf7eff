//! Application constants for the HURDAT2 processor
//!
//! This module contains default thresholds, region approximations and the
//! fixed positional layout of HURDAT2 entry lines used throughout the
//! application.

// =============================================================================
// Region Defaults
// =============================================================================

/// Default target region name resolved from the boundary dataset
pub const DEFAULT_REGION_NAME: &str = "Florida";

/// Axis-aligned bounding box approximating Florida (degrees)
pub mod florida_bbox {
    pub const LAT_MIN: f64 = 24.5;
    pub const LAT_MAX: f64 = 31.0;
    pub const LON_MIN: f64 = -87.6;
    pub const LON_MAX: f64 = -79.8;
}

/// Buffer width around the region boundary, in degrees (roughly 3 miles)
pub const DEFAULT_BUFFER_DEGREES: f64 = 0.05;

// =============================================================================
// Classifier Defaults
// =============================================================================

/// Earliest storm year considered by any classifier
pub const DEFAULT_MIN_YEAR: i32 = 1900;

/// Transition classifier: wind-speed ratio below which the drop vs. the
/// previous fix qualifies (0.8 = dropped by more than 20%)
pub const DEFAULT_WIND_DROP_RATIO: f64 = 0.8;

/// Transition classifier: maximum distance between consecutive fixes that
/// indicates the storm slowed down after crossing onshore (miles)
pub const DEFAULT_APPROACH_DISTANCE_MILES: f64 = 50.0;

/// Multi-signal classifier: maximum distance to the previous or next fix
/// for a qualifying window (miles)
pub const DEFAULT_WINDOW_DISTANCE_MILES: f64 = 100.0;

/// Multi-signal classifier: diagnostic wind-speed ratio (0.9 = dropped by
/// more than 10%); exposed on events, never a gating condition
pub const DEFAULT_DIAGNOSTIC_WIND_DROP_RATIO: f64 = 0.9;

/// Multi-signal classifier: diagnostic pressure rise vs. the previous fix
/// (hPa); exposed on events, never a gating condition
pub const DEFAULT_PRESSURE_RISE_HPA: f64 = 1.5;

// =============================================================================
// HURDAT2 Line Layout
// =============================================================================

/// Positional entry-line field indices per the NHC HURDAT2 format
/// specification (fields beyond [`MIN_PRESSURE`] are quadrant wind radii
/// and the radius of maximum wind, carried through opaquely).
pub mod entry_fields {
    pub const DATE: usize = 0;
    pub const TIME: usize = 1;
    pub const INDICATOR: usize = 2;
    pub const STATUS: usize = 3;
    pub const LATITUDE: usize = 4;
    pub const LONGITUDE: usize = 5;
    pub const MAX_WIND: usize = 6;
    pub const MIN_PRESSURE: usize = 7;
    pub const RADII_START: usize = 8;
}

/// Minimum comma-separated fields for an entry line
pub const ENTRY_MIN_FIELDS: usize = 8;

/// Header ID field length: 2-char basin + 2-char cyclone number + 4-digit year
pub const HEADER_ID_LEN: usize = 8;

// =============================================================================
// Unit Conversions
// =============================================================================

/// Meters per statute mile, for geodesic distances reported in miles
pub const METERS_PER_MILE: f64 = 1609.344;
