//! Landfall event aggregation
//!
//! Collects events from one or more classifiers into a single ordered
//! output sequence. Source order is preserved (storm order, then entry
//! order within each storm); an event already collected from another
//! classifier is not added twice. Events are never mutated here.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};

use crate::app::models::LandfallEvent;

/// Identity of an event irrespective of which classifier produced it
type EventKey = (String, i32, NaiveDate, NaiveTime, u64, u64);

/// Ordered, deduplicating collector for landfall events
#[derive(Debug, Default)]
pub struct LandfallAggregator {
    events: Vec<LandfallEvent>,
    seen: HashSet<EventKey>,
}

impl LandfallAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append events from one classifier run, skipping any fix already
    /// reported by an earlier run
    pub fn merge(&mut self, events: impl IntoIterator<Item = LandfallEvent>) {
        for event in events {
            if self.seen.insert(event_key(&event)) {
                self.events.push(event);
            }
        }
    }

    /// Number of distinct events collected so far
    pub fn count(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Collected events in source order
    pub fn events(&self) -> &[LandfallEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<LandfallEvent> {
        self.events
    }
}

fn event_key(event: &LandfallEvent) -> EventKey {
    (
        event.hurricane.clone(),
        event.year,
        event.date,
        event.time,
        event.latitude.to_bits(),
        event.longitude.to_bits(),
    )
}
