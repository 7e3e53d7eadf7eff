//! Test fixtures and helpers for HURDAT2 parser testing

use std::io::Write;
use tempfile::NamedTempFile;


/// A two-storm HURDAT2 snippet: Andrew (with a documented landfall fix)
/// followed by an unnamed storm that stays offshore
pub fn create_test_hurdat2() -> String {
    "\
AL041992,          ANDREW,      3,
19920823, 1800,  , HU, 25.4N,  74.2W, 120,  930,
19920824, 0905, L, HU, 25.4N,  80.3W, 145,  922,
19920824, 1200,  , HU, 25.6N,  82.0W, 110,  941,
AL051992,         UNNAMED,      2,
19920901, 0000,  , TS, 33.0N,  49.9W,  45, 1001,
19920901, 0600,  , TS, 33.5N,  50.5W,  40, 1004,
"
    .to_string()
}

/// A modern entry line carrying the full wind-radii tail
pub fn create_modern_entry_line() -> String {
    "20210829, 1655, L, HU, 29.1N,  90.2W, 130,  931,  130,  110,   80,  110, \
  70,   60,   40,   60,   40,   35,   25,   30,   10"
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Split a raw line the way the scanner does
pub fn split_line(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}
