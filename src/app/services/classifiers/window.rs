//! Rolling three-fix windows over a storm track
//!
//! The transition and multi-signal classifiers scan each storm with a
//! window of up to three consecutive entries. Windows never cross storm
//! boundaries: the first entry has no predecessor and the last has no
//! successor.

use crate::app::models::{Storm, TrackEntry};

/// One position in the linear scan: the current fix plus its neighbors
#[derive(Debug, Clone, Copy)]
pub struct EntryWindow<'a> {
    pub prev: Option<&'a TrackEntry>,
    pub current: &'a TrackEntry,
    pub next: Option<&'a TrackEntry>,
}

/// Iterate all windows of a storm in source order
pub fn windows(storm: &Storm) -> impl Iterator<Item = EntryWindow<'_>> {
    let entries = &storm.entries;
    (0..entries.len()).map(move |i| EntryWindow {
        prev: i.checked_sub(1).map(|p| &entries[p]),
        current: &entries[i],
        next: entries.get(i + 1),
    })
}
