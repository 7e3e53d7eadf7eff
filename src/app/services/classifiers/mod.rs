//! Landfall classification strategies
//!
//! Four interchangeable heuristics share one contract: given a parsed
//! [`Storm`] they return the landfall events they detect, honoring the
//! configured year floor and emit policy.
//!
//! - [`indicator`] - trusts the source's own `L` record indicator
//! - [`geometric`] - region containment only, ignoring the indicator
//! - [`transition`] - offshore-to-onshore crossing with a wind-drop or
//!   slowdown confirmation
//! - [`multi_signal`] - three-fix window with distance gating and
//!   diagnostic wind/pressure signals

pub mod distance;
pub mod geometric;
pub mod indicator;
pub mod multi_signal;
pub mod transition;
pub mod window;

#[cfg(test)]
pub mod tests;

use std::sync::Arc;

use crate::app::models::{LandfallEvent, Storm};
use crate::app::services::region::RegionBoundary;
use crate::config::ClassifierConfig;

pub use geometric::GeometricClassifier;
pub use indicator::IndicatorClassifier;
pub use multi_signal::MultiSignalClassifier;
pub use transition::TransitionClassifier;

/// A landfall detection strategy
///
/// Implementations are pure: re-running `classify` on the same storm
/// yields identical output, and no state is carried between calls.
pub trait LandfallClassifier {
    /// Strategy name for logs and reports
    fn name(&self) -> &'static str;

    /// Detect landfall events for one storm
    fn classify(&self, storm: &Storm) -> Vec<LandfallEvent>;

    /// Classify a parsed dataset, preserving storm order
    fn classify_all(&self, storms: &[Storm]) -> Vec<LandfallEvent> {
        storms.iter().flat_map(|s| self.classify(s)).collect()
    }
}

/// Selectable classification strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Trust the dataset's `L` record indicator
    Indicator,
    /// Region containment only
    Geometric,
    /// Offshore-to-onshore transition with wind/slowdown confirmation
    Transition,
    /// Three-fix window with distance gating and diagnostic signals
    MultiSignal,
}

/// Construct the classifier for a strategy
///
/// All strategies receive the shared region boundary; the indicator
/// strategy consults it only when `require_region_check` is set.
pub fn build_classifier(
    strategy: Strategy,
    config: ClassifierConfig,
    region: Arc<RegionBoundary>,
) -> Box<dyn LandfallClassifier + Send + Sync> {
    match strategy {
        Strategy::Indicator => Box::new(IndicatorClassifier::new(config, region)),
        Strategy::Geometric => Box::new(GeometricClassifier::new(config, region)),
        Strategy::Transition => Box::new(TransitionClassifier::new(config, region)),
        Strategy::MultiSignal => Box::new(MultiSignalClassifier::new(config, region)),
    }
}
