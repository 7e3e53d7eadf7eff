//! Indicator-based landfall detection
//!
//! The most literal strategy: an entry qualifies when the source data
//! itself flags it with the `L` record indicator. No geometry is needed
//! unless `require_region_check` narrows the hits to the target region.

use std::sync::Arc;

use tracing::trace;

use super::LandfallClassifier;
use crate::app::models::{LandfallEvent, Storm};
use crate::app::services::region::RegionBoundary;
use crate::config::{ClassifierConfig, EmitPolicy};

/// Classifier that trusts the dataset's documented landfall flag
#[derive(Debug)]
pub struct IndicatorClassifier {
    config: ClassifierConfig,
    region: Arc<RegionBoundary>,
}

impl IndicatorClassifier {
    pub fn new(config: ClassifierConfig, region: Arc<RegionBoundary>) -> Self {
        Self { config, region }
    }
}

impl LandfallClassifier for IndicatorClassifier {
    fn name(&self) -> &'static str {
        "indicator"
    }

    fn classify(&self, storm: &Storm) -> Vec<LandfallEvent> {
        let mut events = Vec::new();

        if storm.year() < self.config.min_year {
            return events;
        }

        for entry in &storm.entries {
            if !entry.has_landfall_indicator() {
                continue;
            }

            if self.config.require_region_check
                && !self.region.on_land(entry.latitude, entry.longitude)
            {
                trace!(
                    "'{}' L-flagged fix at ({}, {}) outside {}",
                    storm.header.name,
                    entry.latitude,
                    entry.longitude,
                    self.region.name()
                );
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
