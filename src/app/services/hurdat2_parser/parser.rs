//! Core HURDAT2 parser implementation
//!
//! A single forward scan over the input holding one current-storm slot.
//! Lines are classified by shape: headers flush the previous storm and
//! open a new one, entry lines attach to the current storm, and anything
//! else is skipped. No per-line failure is fatal; only unreadable input
//! raises to the caller.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use super::entry::parse_entry;
use super::header::{is_header_shape, parse_header};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::Storm;
use crate::constants::ENTRY_MIN_FIELDS;
use crate::{Error, Result};

/// Tolerant line-oriented parser for HURDAT2 best-track files
#[derive(Debug, Default)]
pub struct Hurdat2Parser;

impl Hurdat2Parser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a HURDAT2 file and return storms with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing HURDAT2 file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let file = File::open(file_path).map_err(|e| {
            Error::io(format!("failed to open {}", file_path.display()), e)
        })?;

        self.parse_reader(BufReader::new(file))
    }

    /// Parse HURDAT2 text held in memory
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        self.parse_reader(content.as_bytes())
    }

    /// Parse from any buffered reader in one streaming pass
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParseResult> {
        let mut scan = Scan::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io("failed to read input line", e))?;
            scan.accept(&line, index + 1);
        }

        let result = scan.finish();
        info!(
            "Parsed {} storms ({} entries) from {} lines, {} records dropped",
            result.stats.storms_parsed,
            result.stats.entries_parsed,
            result.stats.lines_scanned,
            result.stats.records_dropped()
        );

        Ok(result)
    }
}

/// Forward-scan state: accumulated storms plus the current open slot
struct Scan {
    storms: Vec<Storm>,
    current: Option<Storm>,
    stats: ParseStats,
}

impl Scan {
    fn new() -> Self {
        Self {
            storms: Vec::new(),
            current: None,
            stats: ParseStats::new(),
        }
    }

    /// Classify one line by shape and fold it into the scan state
    fn accept(&mut self, line: &str, line_number: usize) {
        self.stats.lines_scanned += 1;

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        if is_header_shape(&fields) {
            self.flush_current();

            match parse_header(&fields, line_number) {
                Ok(header) => {
                    debug!(
                        "Storm header: {}{}{} '{}' ({} declared entries)",
                        header.basin,
                        header.cyclone_number,
                        header.year,
                        header.name,
                        header.declared_entries
                    );
                    self.current = Some(Storm::new(header));
                }
                Err(e) => {
                    // Entries that follow a dropped header have no owner
                    // and are skipped until the next valid header.
                    self.stats.headers_dropped += 1;
                    self.stats.errors.push(e.to_string());
                    debug!("Dropped header: {}", e);
                    self.current = None;
                }
            }
        } else if fields.len() >= ENTRY_MIN_FIELDS {
            let Some(storm) = self.current.as_mut() else {
                self.stats.lines_skipped += 1;
                return;
            };

            match parse_entry(&fields, line_number) {
                Ok(entry) => {
                    storm.entries.push(entry);
                    self.stats.entries_parsed += 1;
                }
                Err(e) => {
                    self.stats.entries_dropped += 1;
                    self.stats.errors.push(e.to_string());
                    debug!("Dropped entry: {}", e);
                }
            }
        } else {
            self.stats.lines_skipped += 1;
        }
    }

    /// Move the open storm into the output if it holds any entries
    fn flush_current(&mut self) {
        if let Some(storm) = self.current.take() {
            if storm.entries.is_empty() {
                debug!("Discarding storm '{}' with no entries", storm.header.name);
                return;
            }
            if !storm.entry_count_matches() {
                self.stats.count_mismatches += 1;
                warn!(
                    "Storm '{}' declared {} entries but {} parsed",
                    storm.header.name,
                    storm.header.declared_entries,
                    storm.entries.len()
                );
            }
            self.stats.storms_parsed += 1;
            self.storms.push(storm);
        }
    }

    fn finish(mut self) -> ParseResult {
        self.flush_current();
        ParseResult {
            storms: self.storms,
            stats: self.stats,
        }
    }
}
