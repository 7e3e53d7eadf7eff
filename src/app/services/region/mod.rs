//! Region membership oracle
//!
//! Loads the target region's boundary geometry once at startup and
//! answers containment and proximity queries for the landfall
//! classifiers. The boundary is immutable and safely shared (`Arc`)
//! across classifier invocations.

pub mod boundary;

#[cfg(test)]
pub mod tests;

pub use boundary::RegionBoundary;
