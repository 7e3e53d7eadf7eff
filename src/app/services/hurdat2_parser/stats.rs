//! Parsing statistics and result structures for HURDAT2 processing
//!
//! Per-record failures never abort a parse; they are recorded here so the
//! drop rate stays observable instead of being silently swallowed.

use crate::app::models::Storm;

/// Parsing result with storms and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed storms, in source order
    pub storms: Vec<Storm>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Total number of track entries across all storms
    pub fn total_entries(&self) -> usize {
        self.storms.iter().map(|s| s.entries.len()).sum()
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of lines scanned
    pub lines_scanned: usize,

    /// Number of storms with at least one entry
    pub storms_parsed: usize,

    /// Number of track entries successfully parsed
    pub entries_parsed: usize,

    /// Number of header lines dropped as malformed
    pub headers_dropped: usize,

    /// Number of entry lines dropped as malformed
    pub entries_dropped: usize,

    /// Lines matching neither header nor entry shape (format noise)
    pub lines_skipped: usize,

    /// Number of storms whose declared entry count disagreed with the
    /// entries actually parsed
    pub count_mismatches: usize,

    /// Per-record drop reasons for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            lines_scanned: 0,
            storms_parsed: 0,
            entries_parsed: 0,
            headers_dropped: 0,
            entries_dropped: 0,
            lines_skipped: 0,
            count_mismatches: 0,
            errors: Vec::new(),
        }
    }

    /// Total records dropped with a recorded reason
    pub fn records_dropped(&self) -> usize {
        self.headers_dropped + self.entries_dropped
    }

    /// Fraction of entry candidates that parsed cleanly, as a percentage
    pub fn entry_success_rate(&self) -> f64 {
        let attempted = self.entries_parsed + self.entries_dropped;
        if attempted == 0 {
            0.0
        } else {
            (self.entries_parsed as f64 / attempted as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
