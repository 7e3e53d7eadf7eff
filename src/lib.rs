//! HURDAT2 Processor Library
//!
//! A Rust library for parsing NOAA HURDAT2 hurricane best-track data and
//! classifying Florida landfalls with a family of configurable heuristics.
//!
//! This library provides tools for:
//! - Parsing HURDAT2 text files with tolerant header/entry line handling
//! - Normalizing directional latitude/longitude tokens to signed degrees
//! - Loading administrative region boundaries from GeoJSON by feature name
//! - Detecting landfalls via indicator, geometric, offshore-to-onshore
//!   transition, and multi-signal window strategies
//! - Aggregating, deduplicating and exporting landfall events

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod classifiers;
        pub mod hurdat2_parser;
        pub mod region;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{LandfallEvent, Storm, StormHeader, TrackEntry};
pub use config::ClassifierConfig;

/// Result type alias for the HURDAT2 processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for HURDAT2 processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Header line could not be parsed (non-numeric count, truncated ID)
    #[error("malformed header at line {line}: {message}")]
    MalformedHeader { line: usize, message: String },

    /// Track entry line could not be parsed
    #[error("malformed entry at line {line}: {message}")]
    MalformedEntry { line: usize, message: String },

    /// Coordinate token failed to normalize or fell outside valid range
    #[error("invalid coordinate '{token}': {message}")]
    InvalidCoordinate { token: String, message: String },

    /// Named region missing from the boundary dataset
    #[error("region '{name}' not found in boundary dataset")]
    UnresolvedRegion { name: String },

    /// Boundary dataset could not be interpreted
    #[error("boundary format error in '{file}': {message}")]
    BoundaryFormat { file: String, message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// CSV export error
    #[error("CSV export error: {message}")]
    CsvExport {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Date/time parsing error
    #[error("date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// File not found
    #[error("file not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed header error
    pub fn malformed_header(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            line,
            message: message.into(),
        }
    }

    /// Create a malformed entry error
    pub fn malformed_entry(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedEntry {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid coordinate error
    pub fn invalid_coordinate(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create an unresolved region error
    pub fn unresolved_region(name: impl Into<String>) -> Self {
        Self::UnresolvedRegion { name: name.into() }
    }

    /// Create a boundary format error
    pub fn boundary_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BoundaryFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a CSV export error
    pub fn csv_export(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvExport {
            message: message.into(),
            source,
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// True for per-record errors that the parser drops and scans past
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedHeader { .. }
                | Self::MalformedEntry { .. }
                | Self::InvalidCoordinate { .. }
                | Self::DateTimeParsing { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvExport {
            message: "CSV writing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "date/time parsing failed".to_string(),
            source: error,
        }
    }
}
