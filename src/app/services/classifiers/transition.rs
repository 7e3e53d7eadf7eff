//! Offshore-to-onshore transition detection
//!
//! A fix qualifies when its predecessor was offshore, the fix itself is
//! on or near land, and either the wind dropped by more than the
//! configured ratio or the storm covered less than the approach distance
//! since the previous fix (a slowdown typical of crossing onshore).

use std::sync::Arc;

use super::distance::geodesic_miles;
use super::window::windows;
use super::LandfallClassifier;
use crate::app::models::{LandfallEvent, Storm};
use crate::app::services::region::RegionBoundary;
use crate::config::{ClassifierConfig, EmitPolicy};

/// Classifier keyed on the offshore-to-onshore state change
#[derive(Debug)]
pub struct TransitionClassifier {
    config: ClassifierConfig,
    region: Arc<RegionBoundary>,
}

impl TransitionClassifier {
    pub fn new(config: ClassifierConfig, region: Arc<RegionBoundary>) -> Self {
        Self { config, region }
    }

    /// Wind fell below the configured fraction of the previous reading
    fn wind_dropped(&self, previous_kt: i32, current_kt: i32) -> bool {
        (current_kt as f64) < (previous_kt as f64) * self.config.wind_drop_ratio
    }
}

impl LandfallClassifier for TransitionClassifier {
    fn name(&self) -> &'static str {
        "transition"
    }

    fn classify(&self, storm: &Storm) -> Vec<LandfallEvent> {
        let mut events = Vec::new();

        if storm.year() < self.config.min_year {
            return events;
        }

        for window in windows(storm) {
            // The first fix of a storm has no predecessor to transition from.
            let Some(prev) = window.prev else { continue };
            let current = window.current;

            if self.region.near_land(prev.latitude, prev.longitude) {
                continue;
            }
            if !self.region.near_land(current.latitude, current.longitude) {
                continue;
            }

            // Fails open to infinity on invalid coordinates, so the
            // under-distance clause can never fire on corrupt input.
            let travelled = geodesic_miles(prev.position(), current.position());

            let qualified = self.wind_dropped(prev.max_wind_kt, current.max_wind_kt)
                || travelled < self.config.approach_distance_miles;

            if !qualified {
                continue;
            }

            events.push(LandfallEvent::from_entry(&storm.header, current));

            if self.config.emit_policy == EmitPolicy::FirstOnly {
                break;
            }
        }

        events
    }
}
