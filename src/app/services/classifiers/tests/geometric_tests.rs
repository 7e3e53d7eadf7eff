//! Tests for the geometric-only classifier

use super::{square_region, storm};
use crate::app::services::classifiers::{GeometricClassifier, LandfallClassifier};
use crate::config::{ClassifierConfig, EmitPolicy};

#[test]
fn on_land_fix_qualifies_without_indicator() {
    let classifier = GeometricClassifier::new(ClassifierConfig::default(), square_region());
    let s = storm(1992, &[(5.0, -2.0, 120, None), (5.0, 5.0, 110, None)]);

    let events = classifier.classify(&s);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].longitude, 5.0);
}

#[test]
fn offshore_track_yields_nothing() {
    let classifier = GeometricClassifier::new(ClassifierConfig::default(), square_region());
    let s = storm(1992, &[(20.0, -20.0, 120, Some("L"))]);
    assert!(classifier.classify(&s).is_empty());
}

#[test]
fn indicator_is_ignored() {
    // The L flag on an offshore fix does not help, and an on-land fix
    // qualifies without one.
    let classifier = GeometricClassifier::new(ClassifierConfig::default(), square_region());
    let s = storm(1992, &[(20.0, -20.0, 120, Some("L")), (5.0, 5.0, 110, None)]);

    let events = classifier.classify(&s);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].latitude, 5.0);
}

#[test]
fn all_matches_reports_every_on_land_fix() {
    let config = ClassifierConfig {
        emit_policy: EmitPolicy::AllMatches,
        ..Default::default()
    };
    let classifier = GeometricClassifier::new(config, square_region());
    let s = storm(
        1992,
        &[(5.0, 5.0, 120, None), (6.0, 6.0, 110, None), (20.0, 20.0, 100, None)],
    );
    assert_eq!(classifier.classify(&s).len(), 2);
}

#[test]
fn min_year_filter_applies() {
    let classifier = GeometricClassifier::new(ClassifierConfig::default(), square_region());
    let s = storm(1899, &[(5.0, 5.0, 120, None)]);
    assert!(classifier.classify(&s).is_empty());
}
