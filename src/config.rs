//! Configuration for the landfall classification engine.
//!
//! All detection thresholds (wind-drop ratios, distance cutoffs, buffer
//! width, year floor) live in an explicit [`ClassifierConfig`] passed to
//! classifiers at construction time, so the engine itself carries no
//! implicit global constants.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_APPROACH_DISTANCE_MILES, DEFAULT_BUFFER_DEGREES, DEFAULT_DIAGNOSTIC_WIND_DROP_RATIO,
    DEFAULT_MIN_YEAR, DEFAULT_PRESSURE_RISE_HPA, DEFAULT_WINDOW_DISTANCE_MILES,
    DEFAULT_WIND_DROP_RATIO,
};
use crate::{Error, Result};

/// How many qualifying entries a classifier reports per storm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmitPolicy {
    /// Stop after the first qualifying entry of each storm
    FirstOnly,
    /// Report every qualifying entry
    AllMatches,
}

impl Default for EmitPolicy {
    fn default() -> Self {
        EmitPolicy::FirstOnly
    }
}

/// Tunable parameters shared by all landfall classifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Storms before this year are skipped entirely
    pub min_year: i32,

    /// First qualifying entry only, or all qualifying entries per storm
    pub emit_policy: EmitPolicy,

    /// Buffer width around the region boundary in degrees; points within
    /// this distance of the border count as near-land
    pub buffer_degrees: f64,

    /// Wind ratio current/previous below which the transition classifier
    /// treats the drop as a landfall signal
    pub wind_drop_ratio: f64,

    /// Distance between consecutive fixes (miles) under which the
    /// transition classifier treats the slowdown as a landfall signal
    pub approach_distance_miles: f64,

    /// Maximum distance to the previous or next fix (miles) for a
    /// qualifying multi-signal window
    pub window_distance_miles: f64,

    /// Diagnostic wind ratio for multi-signal events (not gating)
    pub diagnostic_wind_drop_ratio: f64,

    /// Diagnostic pressure rise for multi-signal events in hPa (not gating)
    pub pressure_rise_hpa: f64,

    /// Indicator classifier only: additionally require the flagged entry
    /// to fall on land within the target region
    pub require_region_check: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            emit_policy: EmitPolicy::default(),
            buffer_degrees: DEFAULT_BUFFER_DEGREES,
            wind_drop_ratio: DEFAULT_WIND_DROP_RATIO,
            approach_distance_miles: DEFAULT_APPROACH_DISTANCE_MILES,
            window_distance_miles: DEFAULT_WINDOW_DISTANCE_MILES,
            diagnostic_wind_drop_ratio: DEFAULT_DIAGNOSTIC_WIND_DROP_RATIO,
            pressure_rise_hpa: DEFAULT_PRESSURE_RISE_HPA,
            require_region_check: false,
        }
    }
}

impl ClassifierConfig {
    /// Validate threshold values, failing fast before any classification
    pub fn validate(&self) -> Result<()> {
        if self.buffer_degrees < 0.0 {
            return Err(Error::configuration(format!(
                "buffer_degrees must be non-negative, got {}",
                self.buffer_degrees
            )));
        }

        for (name, ratio) in [
            ("wind_drop_ratio", self.wind_drop_ratio),
            (
                "diagnostic_wind_drop_ratio",
                self.diagnostic_wind_drop_ratio,
            ),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(Error::configuration(format!(
                    "{} must be within [0.0, 1.0], got {}",
                    name, ratio
                )));
            }
        }

        for (name, miles) in [
            ("approach_distance_miles", self.approach_distance_miles),
            ("window_distance_miles", self.window_distance_miles),
        ] {
            if !miles.is_finite() || miles <= 0.0 {
                return Err(Error::configuration(format!(
                    "{} must be a positive finite distance, got {}",
                    name, miles
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ClassifierConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_year, 1900);
        assert_eq!(config.emit_policy, EmitPolicy::FirstOnly);
    }

    #[test]
    fn negative_buffer_rejected() {
        let config = ClassifierConfig {
            buffer_degrees: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn wind_ratio_above_one_rejected() {
        let config = ClassifierConfig {
            wind_drop_ratio: 1.2,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_distance_rejected() {
        let config = ClassifierConfig {
            window_distance_miles: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
