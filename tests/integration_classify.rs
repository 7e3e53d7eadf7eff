//! End-to-end tests for the parse/classify pipeline
//!
//! These tests write self-contained HURDAT2 and GeoJSON fixtures to
//! temporary files and run the full library pipeline against them,
//! checking that the strategies agree on an unambiguous landfall.

use std::io::Write;
use std::sync::Arc;

use hurdat2_processor::app::services::aggregator::LandfallAggregator;
use hurdat2_processor::app::services::classifiers::{build_classifier, Strategy};
use hurdat2_processor::app::services::hurdat2_parser::Hurdat2Parser;
use hurdat2_processor::app::services::region::RegionBoundary;
use hurdat2_processor::config::{ClassifierConfig, EmitPolicy};
use tempfile::NamedTempFile;

/// Two-storm dataset: one storm crosses into Florida with an L record,
/// the other stays far out in the Atlantic.
const TRACK_DATA: &str = "\
AL011992,              ANDREW,      5,
19920822, 1800,  , TS, 25.4N,  74.2W,  60, 1004, 125,  105,   75,   95,    0,    0,    0,    0,    0,    0,    0,    0, -999
19920823, 1800,  , HU, 25.4N,  77.5W, 120,  941, 125,  105,   75,   95,   50,   40,   30,   40,   25,   20,   15,   20, -999
19920824, 0600,  , HU, 25.4N,  79.9W, 140,  930, 125,  105,   75,   95,   50,   40,   30,   40,   25,   20,   15,   20, -999
19920824, 0905, L, HU, 25.5N,  80.3W, 145,  922, 125,  105,   75,   95,   50,   40,   30,   40,   25,   20,   15,   20, -999
19920824, 1800,  , HU, 25.8N,  82.8W, 115,  950, 125,  105,   75,   95,   50,   40,   30,   40,   25,   20,   15,   20, -999
AL021992,             UNNAMED,      2,
19920901, 0000,  , TS, 32.0N,  45.0W,  45, 1002,   60,   60,   45,   45,    0,    0,    0,    0,    0,    0,    0,    0, -999
19920901, 0600,  , TS, 32.5N,  44.0W,  50, 1000,   60,   60,   45,   45,    0,    0,    0,    0,    0,    0,    0,    0, -999
";

fn write_track_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp track file");
    file.write_all(TRACK_DATA.as_bytes())
        .expect("failed to write track fixture");
    file
}

fn write_boundary_file() -> NamedTempFile {
    // Rectangular stand-in for the Florida peninsula, wide enough to
    // contain the 25.5N 80.3W landfall fix.
    let geojson = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "Florida" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [-83.0, 24.8], [-80.0, 24.8], [-80.0, 30.5],
                        [-83.0, 30.5], [-83.0, 24.8]
                    ]]
                }
            },
            {
                "type": "Feature",
                "properties": { "name": "Elsewhere" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [10.0, 10.0], [11.0, 10.0], [11.0, 11.0],
                        [10.0, 11.0], [10.0, 10.0]
                    ]]
                }
            }
        ]
    }"#;
    let mut file = NamedTempFile::new().expect("failed to create temp boundary file");
    file.write_all(geojson.as_bytes())
        .expect("failed to write boundary fixture");
    file
}

fn load_region(config: &ClassifierConfig) -> Arc<RegionBoundary> {
    let boundary_file = write_boundary_file();
    Arc::new(
        RegionBoundary::from_geojson_file(
            boundary_file.path(),
            "Florida",
            None,
            config.buffer_degrees,
        )
        .expect("failed to load region fixture"),
    )
}

#[test]
fn indicator_strategy_finds_the_single_flagged_landfall() {
    let track_file = write_track_file();
    let parser = Hurdat2Parser::new();
    let parsed = parser
        .parse_file(track_file.path())
        .expect("fixture should parse");

    assert_eq!(parsed.storms.len(), 2);
    assert_eq!(parsed.stats.entries_parsed, 7);

    let config = ClassifierConfig::default();
    let region = load_region(&config);
    let classifier = build_classifier(Strategy::Indicator, config, region);

    let mut aggregator = LandfallAggregator::new();
    aggregator.merge(classifier.classify_all(&parsed.storms));

    assert_eq!(aggregator.count(), 1);
    let event = &aggregator.events()[0];
    assert_eq!(event.hurricane, "ANDREW");
    assert_eq!(event.year, 1992);
    assert_eq!(event.max_wind_kt, 145);
    assert!((event.latitude - 25.5).abs() < f64::EPSILON);
    assert!((event.longitude - (-80.3)).abs() < f64::EPSILON);
}

#[test]
fn geometric_strategy_agrees_on_the_landfalling_storm() {
    let track_file = write_track_file();
    let parsed = Hurdat2Parser::new()
        .parse_file(track_file.path())
        .expect("fixture should parse");

    let config = ClassifierConfig::default();
    let region = load_region(&config);
    let classifier = build_classifier(Strategy::Geometric, config, region);

    let events = classifier.classify_all(&parsed.storms);

    // Only the first storm ever touches the region.
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].hurricane, "ANDREW");
}

#[test]
fn all_matches_policy_reports_every_fix_over_the_region() {
    let track_file = write_track_file();
    let parsed = Hurdat2Parser::new()
        .parse_file(track_file.path())
        .expect("fixture should parse");

    let config = ClassifierConfig {
        emit_policy: EmitPolicy::AllMatches,
        ..ClassifierConfig::default()
    };
    let region = load_region(&config);
    let classifier = build_classifier(Strategy::Geometric, config, region);

    let events = classifier.classify_all(&parsed.storms);

    // The 80.3W and 82.8W fixes both fall inside the polygon.
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.hurricane == "ANDREW"));
}

#[test]
fn min_year_gate_excludes_old_storms() {
    let track_file = write_track_file();
    let parsed = Hurdat2Parser::new()
        .parse_file(track_file.path())
        .expect("fixture should parse");

    let config = ClassifierConfig {
        min_year: 2000,
        ..ClassifierConfig::default()
    };
    let region = load_region(&config);
    let classifier = build_classifier(Strategy::Indicator, config, region);

    assert!(classifier.classify_all(&parsed.storms).is_empty());
}

#[test]
fn transition_strategy_detects_the_sea_to_land_crossing() {
    let track_file = write_track_file();
    let parsed = Hurdat2Parser::new()
        .parse_file(track_file.path())
        .expect("fixture should parse");

    let config = ClassifierConfig::default();
    let region = load_region(&config);
    let classifier = build_classifier(Strategy::Transition, config, region);

    let events = classifier.classify_all(&parsed.storms);

    // 79.9W is open water just off the polygon edge. The hop onto
    // land at 80.3W covers roughly 25 miles, so the approach-distance
    // clause qualifies the crossing even though the wind rises.
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].hurricane, "ANDREW");
    assert_eq!(events[0].max_wind_kt, 145);
}
