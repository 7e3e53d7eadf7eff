//! Geodesic distance between track fixes
//!
//! Distances use the ellipsoidal (Karney) geodesic, reported in statute
//! miles. Invalid coordinates fail open to an infinite distance so
//! corrupt input can never satisfy an under-threshold clause.

use geo::{GeodesicDistance, Point};

use crate::constants::METERS_PER_MILE;

/// Ellipsoidal distance in statute miles between two (lat, lon) fixes
///
/// Returns `f64::INFINITY` when either fix is not a valid coordinate.
pub fn geodesic_miles(from: (f64, f64), to: (f64, f64)) -> f64 {
    if !is_valid_fix(from) || !is_valid_fix(to) {
        return f64::INFINITY;
    }

    let a = Point::new(from.1, from.0);
    let b = Point::new(to.1, to.0);
    a.geodesic_distance(&b) / METERS_PER_MILE
}

fn is_valid_fix((latitude, longitude): (f64, f64)) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}
