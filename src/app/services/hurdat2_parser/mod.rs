//! HURDAT2 parser for NOAA hurricane best-track files
//!
//! This module provides a tolerant parser for the HURDAT2 positional text
//! format: alternating storm header lines and comma-separated track entry
//! lines. Malformed records are dropped with a recorded reason while the
//! scan continues; only unreadable input is fatal.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Forward scan orchestration and file handling
//! - [`header`] - Header line shape detection and metadata extraction
//! - [`entry`] - Positional track entry parsing
//! - [`coordinates`] - Directional latitude/longitude normalization
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use hurdat2_processor::app::services::hurdat2_parser::Hurdat2Parser;
//!
//! # fn example() -> hurdat2_processor::Result<()> {
//! let parser = Hurdat2Parser::new();
//! let result = parser.parse_file(std::path::Path::new("hurdat2.txt"))?;
//!
//! println!("Parsed {} storms, {} entries dropped",
//!          result.stats.storms_parsed,
//!          result.stats.entries_dropped);
//! # Ok(())
//! # }
//! ```

pub mod coordinates;
pub mod entry;
pub mod header;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::Hurdat2Parser;
pub use stats::{ParseResult, ParseStats};
