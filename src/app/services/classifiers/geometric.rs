//! Geometric-only landfall detection
//!
//! Ignores the record indicator entirely and reports entries whose fix
//! falls on land within the target region (polygon or bounding box).
//! Used when the `L` flag is considered unreliable or not specific to
//! the region of interest.

use std::sync::Arc;

use super::LandfallClassifier;
use crate::app::models::{LandfallEvent, Storm};
use crate::app::services::region::RegionBoundary;
use crate::config::{ClassifierConfig, EmitPolicy};

/// Classifier driven purely by region containment
#[derive(Debug)]
pub struct GeometricClassifier {
    config: ClassifierConfig,
    region: Arc<RegionBoundary>,
}

impl GeometricClassifier {
    pub fn new(config: ClassifierConfig, region: Arc<RegionBoundary>) -> Self {
        Self { config, region }
    }
}

impl LandfallClassifier for GeometricClassifier {
    fn name(&self) -> &'static str {
        "geometric"
    }

    fn classify(&self, storm: &Storm) -> Vec<LandfallEvent> {
        let mut events = Vec::new();

        if storm.year() < self.config.min_year {
            return events;
        }

        for entry in &storm.entries {
            if !self.region.on_land(entry.latitude, entry.longitude) {
                continue;
            }

            events.push(LandfallEvent::from_entry(&storm.header, entry));

            if self.config.emit_policy == EmitPolicy::FirstOnly {
                break;
            }
        }

        events
    }
}
