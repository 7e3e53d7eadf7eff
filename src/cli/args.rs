//! Command-line argument definitions for the HURDAT2 processor
//!
//! Defines the complete CLI interface using the clap derive API. Every
//! detection threshold the engine uses is exposed as a flag so the
//! classifiers carry no hardcoded behavior.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::app::services::classifiers::Strategy;
use crate::config::{ClassifierConfig, EmitPolicy};
use crate::constants::{
    DEFAULT_APPROACH_DISTANCE_MILES, DEFAULT_BUFFER_DEGREES, DEFAULT_DIAGNOSTIC_WIND_DROP_RATIO,
    DEFAULT_MIN_YEAR, DEFAULT_PRESSURE_RISE_HPA, DEFAULT_REGION_NAME,
    DEFAULT_WINDOW_DISTANCE_MILES, DEFAULT_WIND_DROP_RATIO,
};
use crate::{Error, Result};

/// CLI arguments for the HURDAT2 processor
///
/// Parses NOAA HURDAT2 hurricane best-track data and detects landfalls
/// in a target region with configurable heuristics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hurdat2-processor",
    version,
    about = "Parse NOAA HURDAT2 best-track data and detect regional hurricane landfalls",
    long_about = "A tool that parses the NOAA HURDAT2 hurricane best-track dataset and \
                  classifies per-storm landfalls in a target region (Florida by default) \
                  using one of four heuristics: the dataset's own landfall indicator, \
                  polygon/bounding-box containment, offshore-to-onshore transitions, or a \
                  multi-signal sliding window over consecutive fixes."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v = debug, -vv = trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

impl Args {
    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Available subcommands for the HURDAT2 processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Detect regional landfalls in a HURDAT2 file (main command)
    Classify(ClassifyArgs),
    /// Parse a HURDAT2 file and export every track entry as flat CSV
    Export(ExportArgs),
}

/// Output serialization for detected events
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

/// Arguments for the classify command
#[derive(Debug, Clone, Parser)]
pub struct ClassifyArgs {
    /// Path to the HURDAT2 best-track text file
    ///
    /// The Atlantic dataset is published by the NHC at
    /// https://www.nhc.noaa.gov/data/hurdat/
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Path to a GeoJSON administrative-boundary dataset
    ///
    /// Expected to be a FeatureCollection whose features carry a `name`
    /// property, such as the Natural Earth admin-1 states/provinces
    /// dataset converted to GeoJSON.
    #[arg(short = 'b', long = "boundary", value_name = "PATH")]
    pub boundary: PathBuf,

    /// Region feature name to resolve from the boundary dataset
    #[arg(long = "region", value_name = "NAME", default_value = DEFAULT_REGION_NAME)]
    pub region: String,

    /// Landfall detection strategy
    #[arg(short = 's', long = "strategy", value_enum, default_value_t = Strategy::Indicator)]
    pub strategy: Strategy,

    /// Skip storms before this season year
    #[arg(long = "min-year", value_name = "YEAR", default_value_t = DEFAULT_MIN_YEAR)]
    pub min_year: i32,

    /// Report every qualifying fix per storm instead of only the first
    #[arg(long = "all-events")]
    pub all_events: bool,

    /// Indicator strategy only: require L-flagged fixes to fall within
    /// the target region
    #[arg(long = "with-region-check")]
    pub with_region_check: bool,

    /// Buffer width around the region border, in degrees
    #[arg(long = "buffer-degrees", value_name = "DEG", default_value_t = DEFAULT_BUFFER_DEGREES)]
    pub buffer_degrees: f64,

    /// Transition strategy: wind ratio current/previous below which the
    /// drop qualifies (0.8 = dropped by more than 20%)
    #[arg(long = "wind-drop-ratio", value_name = "RATIO", default_value_t = DEFAULT_WIND_DROP_RATIO)]
    pub wind_drop_ratio: f64,

    /// Transition strategy: hop distance under which a slowdown
    /// qualifies, in miles
    #[arg(
        long = "approach-distance",
        value_name = "MILES",
        default_value_t = DEFAULT_APPROACH_DISTANCE_MILES
    )]
    pub approach_distance_miles: f64,

    /// Multi-signal strategy: maximum neighbor hop distance, in miles
    #[arg(
        long = "window-distance",
        value_name = "MILES",
        default_value_t = DEFAULT_WINDOW_DISTANCE_MILES
    )]
    pub window_distance_miles: f64,

    /// Multi-signal strategy: diagnostic wind ratio (not gating)
    #[arg(
        long = "diagnostic-wind-ratio",
        value_name = "RATIO",
        default_value_t = DEFAULT_DIAGNOSTIC_WIND_DROP_RATIO
    )]
    pub diagnostic_wind_drop_ratio: f64,

    /// Multi-signal strategy: diagnostic pressure rise in hPa (not gating)
    #[arg(
        long = "pressure-rise",
        value_name = "HPA",
        default_value_t = DEFAULT_PRESSURE_RISE_HPA
    )]
    pub pressure_rise_hpa: f64,

    /// Write detected events to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output serialization format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}

impl ClassifyArgs {
    /// Build and validate the engine configuration from the flags
    pub fn to_config(&self) -> Result<ClassifierConfig> {
        let config = ClassifierConfig {
            min_year: self.min_year,
            emit_policy: if self.all_events {
                EmitPolicy::AllMatches
            } else {
                EmitPolicy::FirstOnly
            },
            buffer_degrees: self.buffer_degrees,
            wind_drop_ratio: self.wind_drop_ratio,
            approach_distance_miles: self.approach_distance_miles,
            window_distance_miles: self.window_distance_miles,
            diagnostic_wind_drop_ratio: self.diagnostic_wind_drop_ratio,
            pressure_rise_hpa: self.pressure_rise_hpa,
            require_region_check: self.with_region_check,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate argument combinations before any work starts
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::file_not_found(self.input.display().to_string()));
        }
        if !self.boundary.exists() {
            return Err(Error::file_not_found(self.boundary.display().to_string()));
        }
        if self.with_region_check && self.strategy != Strategy::Indicator {
            return Err(Error::configuration(
                "--with-region-check only applies to the indicator strategy",
            ));
        }
        self.to_config().map(|_| ())
    }
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Path to the HURDAT2 best-track text file
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Output CSV path
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "hurricane_data.csv"
    )]
    pub output: PathBuf,
}

impl ExportArgs {
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::file_not_found(self.input.display().to_string()));
        }
        Ok(())
    }
}
