//! Multi-signal window detection
//!
//! The most elaborate heuristic. A fix qualifies when its predecessor was
//! offshore while the fix and its successor are both near land (the storm
//! stayed on land rather than skimming the coast), and at least one of
//! the neighboring hops is under the window distance. Wind-drop and
//! pressure-rise signals are computed against the previous fix and
//! exposed on the event as diagnostics, never as gating conditions.

use std::collections::HashSet;
use std::sync::Arc;

use super::distance::geodesic_miles;
use super::window::windows;
use super::LandfallClassifier;
use crate::app::models::{LandfallEvent, LandfallSignals, Storm, TrackEntry};
use crate::app::services::region::RegionBoundary;
use crate::config::{ClassifierConfig, EmitPolicy};

/// Composite key identifying duplicate fixes within one storm
type FixKey = (String, chrono::NaiveDate, u64, u64);

/// Classifier combining position windows, hop distances and diagnostics
#[derive(Debug)]
pub struct MultiSignalClassifier {
    config: ClassifierConfig,
    region: Arc<RegionBoundary>,
}

impl MultiSignalClassifier {
    pub fn new(config: ClassifierConfig, region: Arc<RegionBoundary>) -> Self {
        Self { config, region }
    }

    fn near_land(&self, entry: &TrackEntry) -> bool {
        self.region.near_land(entry.latitude, entry.longitude)
    }

    /// Exploratory signals relative to the previous fix
    fn signals(&self, prev: &TrackEntry, current: &TrackEntry) -> LandfallSignals {
        let wind_drop = (current.max_wind_kt as f64)
            < (prev.max_wind_kt as f64) * self.config.diagnostic_wind_drop_ratio;

        let pressure_rise = match (prev.min_pressure_hpa, current.min_pressure_hpa) {
            (Some(before), Some(after)) => {
                (after as f64) > (before as f64) + self.config.pressure_rise_hpa
            }
            _ => false,
        };

        LandfallSignals {
            wind_drop,
            pressure_rise,
        }
    }

    fn fix_key(&self, storm: &Storm, entry: &TrackEntry) -> FixKey {
        (
            storm.header.basin.clone(),
            entry.date,
            entry.latitude.to_bits(),
            entry.longitude.to_bits(),
        )
    }
}

impl LandfallClassifier for MultiSignalClassifier {
    fn name(&self) -> &'static str {
        "multi-signal"
    }

    fn classify(&self, storm: &Storm) -> Vec<LandfallEvent> {
        let mut events = Vec::new();

        if storm.year() < self.config.min_year {
            return events;
        }

        // Duplicate fixes (same basin/date/position) keep the earliest hit.
        let mut seen: HashSet<FixKey> = HashSet::new();

        for window in windows(storm) {
            // The full three-fix window is required: no decision is made
            // until both neighbors are available.
            let (Some(prev), Some(next)) = (window.prev, window.next) else {
                continue;
            };
            let current = window.current;

            if self.near_land(prev) || !self.near_land(current) || !self.near_land(next) {
                continue;
            }

            let hop_in = geodesic_miles(prev.position(), current.position());
            let hop_out = geodesic_miles(current.position(), next.position());
            if hop_in >= self.config.window_distance_miles
                && hop_out >= self.config.window_distance_miles
            {
                continue;
            }

            if !seen.insert(self.fix_key(storm, current)) {
                continue;
            }

            events.push(
                LandfallEvent::from_entry(&storm.header, current)
                    .with_signals(self.signals(prev, current)),
            );

            if self.config.emit_policy == EmitPolicy::FirstOnly {
                break;
            }
        }

        events
    }
}
