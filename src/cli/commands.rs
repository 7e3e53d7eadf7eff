//! Command implementations for the HURDAT2 processor CLI
//!
//! Contains the command execution logic: logging setup, boundary
//! loading, parse/classify orchestration, event serialization and the
//! final summary report.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use colored::Colorize;
use geo::{coord, Rect};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::app::models::{LandfallEvent, Storm};
use crate::app::services::aggregator::LandfallAggregator;
use crate::app::services::classifiers::build_classifier;
use crate::app::services::hurdat2_parser::{Hurdat2Parser, ParseResult};
use crate::app::services::region::RegionBoundary;
use crate::cli::args::{Args, ClassifyArgs, Commands, ExportArgs, OutputFormat};
use crate::constants::{florida_bbox, DEFAULT_REGION_NAME};
use crate::{Error, Result};

/// CSV column order for exported track entries, mirroring the fixed
/// HURDAT2 schema with the opaque wind-radii tail
const EXPORT_COLUMNS: &[&str] = &[
    "Basin",
    "Name",
    "Date",
    "Time",
    "Indicator",
    "Status",
    "Latitude",
    "Longitude",
    "Max_Wind_Speed",
    "Min_Pressure",
    "34kt_NE",
    "34kt_SE",
    "34kt_SW",
    "34kt_NW",
    "50kt_NE",
    "50kt_SE",
    "50kt_SW",
    "50kt_NW",
    "64kt_NE",
    "64kt_SE",
    "64kt_SW",
    "64kt_NW",
    "Radius_Max_Wind",
];

/// Number of opaque radii columns in the export schema
const EXPORT_RADII_COLUMNS: usize = 13;

/// Main command runner
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    match &args.command {
        Some(Commands::Classify(classify)) => run_classify(classify, args.quiet),
        Some(Commands::Export(export)) => run_export(export, args.quiet),
        None => {
            // main() shows the help screen before calling run
            Ok(())
        }
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hurdat2_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Execute the classify command end to end
fn run_classify(args: &ClassifyArgs, quiet: bool) -> Result<()> {
    let start_time = Instant::now();

    args.validate()?;
    let config = args.to_config()?;
    debug!("Classifier configuration: {:?}", config);

    let spinner = create_spinner(quiet);

    // Boundary geometry is loaded once and shared read-only by every
    // classification call.
    spinner.set_message(format!("Loading region '{}'...", args.region));
    let region = Arc::new(RegionBoundary::from_geojson_file(
        &args.boundary,
        &args.region,
        default_bbox_for(&args.region),
        config.buffer_degrees,
    )?);

    spinner.set_message(format!("Parsing {}...", args.input.display()));
    let parser = Hurdat2Parser::new();
    let parsed = parser.parse_file(&args.input)?;

    spinner.set_message(format!("Classifying with {:?} strategy...", args.strategy));
    let classifier = build_classifier(args.strategy, config, region);
    let mut aggregator = LandfallAggregator::new();
    aggregator.merge(classifier.classify_all(&parsed.storms));

    spinner.finish_and_clear();
    info!(
        "{} strategy found {} landfall events",
        classifier.name(),
        aggregator.count()
    );

    write_events(aggregator.events(), args)?;

    if !quiet {
        print_classify_report(&parsed, aggregator.count(), classifier.name(), start_time);
    }

    Ok(())
}

/// Execute the export command: parse and dump every entry as flat CSV
fn run_export(args: &ExportArgs, quiet: bool) -> Result<()> {
    let start_time = Instant::now();

    args.validate()?;

    let spinner = create_spinner(quiet);
    spinner.set_message(format!("Parsing {}...", args.input.display()));

    let parser = Hurdat2Parser::new();
    let parsed = parser.parse_file(&args.input)?;

    spinner.set_message(format!("Writing {}...", args.output.display()));
    write_entries_csv(&parsed.storms, &args.output)?;
    spinner.finish_and_clear();

    if !quiet {
        println!("{}", "Export complete".green().bold());
        println!(
            "  {} storms, {} entries -> {} in {}",
            parsed.stats.storms_parsed,
            parsed.stats.entries_parsed,
            args.output.display(),
            HumanDuration(start_time.elapsed())
        );
    }

    Ok(())
}

/// Bounding-box approximation for well-known regions
///
/// Florida gets the literature bounding box; any other region falls back
/// to a box derived from its polygon extent.
fn default_bbox_for(region: &str) -> Option<Rect<f64>> {
    if region == DEFAULT_REGION_NAME {
        Some(Rect::new(
            coord! { x: florida_bbox::LON_MIN, y: florida_bbox::LAT_MIN },
            coord! { x: florida_bbox::LON_MAX, y: florida_bbox::LAT_MAX },
        ))
    } else {
        None
    }
}

fn create_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

/// Serialize detected events to the configured destination and format
fn write_events(events: &[LandfallEvent], args: &ClassifyArgs) -> Result<()> {
    let mut writer = open_output(args.output.as_deref())?;

    match args.format {
        OutputFormat::Csv => write_events_csv(events, &mut writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, events).map_err(|e| {
                Error::csv_export(format!("JSON serialization failed: {}", e), None)
            })?;
            writeln!(writer).map_err(|e| Error::io("failed to write output", e))?;
            Ok(())
        }
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| Error::io(format!("failed to create {}", path.display()), e))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

/// Write events in a flat CSV layout with source-style date and time fields
fn write_events_csv(events: &[LandfallEvent], writer: impl Write) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "Hurricane",
        "Year",
        "Date",
        "Time",
        "Latitude",
        "Longitude",
        "Max_Wind_Speed",
        "Wind_Drop",
        "Pressure_Rise",
    ])?;

    for event in events {
        let (wind_drop, pressure_rise) = match event.signals {
            Some(signals) => (signals.wind_drop.to_string(), signals.pressure_rise.to_string()),
            None => (String::new(), String::new()),
        };

        csv_writer.write_record([
            event.hurricane.as_str(),
            &event.year.to_string(),
            &event.date.format("%Y%m%d").to_string(),
            &event.time.format("%H%M").to_string(),
            &event.latitude.to_string(),
            &event.longitude.to_string(),
            &event.max_wind_kt.to_string(),
            &wind_drop,
            &pressure_rise,
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::io("failed to flush CSV output", e))?;
    Ok(())
}

/// Write every parsed track entry as one flat CSV row
fn write_entries_csv(storms: &[Storm], path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create {}", path.display()), e))?;
    let mut csv_writer = csv::Writer::from_writer(file);

    csv_writer.write_record(EXPORT_COLUMNS)?;

    for storm in storms {
        for entry in &storm.entries {
            let mut record = vec![
                storm.header.basin.clone(),
                storm.header.name.clone(),
                entry.date.format("%Y%m%d").to_string(),
                entry.time.format("%H%M").to_string(),
                entry.indicator.clone().unwrap_or_default(),
                entry.status.clone(),
                entry.latitude.to_string(),
                entry.longitude.to_string(),
                entry.max_wind_kt.to_string(),
                entry
                    .min_pressure_hpa
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
            ];

            // Pad or truncate the opaque radii tail to the fixed schema.
            for i in 0..EXPORT_RADII_COLUMNS {
                record.push(entry.wind_radii.get(i).cloned().unwrap_or_default());
            }

            csv_writer.write_record(&record)?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| Error::io("failed to flush CSV output", e))?;
    Ok(())
}

/// Print the colored end-of-run summary
fn print_classify_report(
    parsed: &ParseResult,
    events_found: usize,
    strategy_name: &str,
    start_time: Instant,
) {
    println!();
    println!("{}", "Classification complete".green().bold());
    println!(
        "  {} storms parsed ({} entries, {} records dropped)",
        parsed.stats.storms_parsed.to_string().cyan(),
        parsed.stats.entries_parsed,
        parsed.stats.records_dropped()
    );
    if parsed.stats.count_mismatches > 0 {
        println!(
            "  {} storms with declared/parsed entry count mismatch",
            parsed.stats.count_mismatches.to_string().yellow()
        );
    }
    println!(
        "  {} landfall events found by the {} strategy",
        events_found.to_string().cyan().bold(),
        strategy_name
    );
    println!("  finished in {}", HumanDuration(start_time.elapsed()));
}
