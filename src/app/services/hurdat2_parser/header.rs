//! HURDAT2 header line parsing
//!
//! A header line announces a new storm and carries a packed ID, the storm
//! name and the number of track entries that follow:
//!
//! ```text
//! AL092021,               IDA,     40,
//! ```
//!
//! Depending on the source variant the trailing comma yields either three
//! non-empty fields or four fields with a blank fourth.

use crate::app::models::StormHeader;
use crate::constants::HEADER_ID_LEN;
use crate::{Error, Result};

/// Decide whether a split line has the shape of a header
///
/// Exactly 3 non-empty fields, or 4 fields where only the 4th is blank.
pub fn is_header_shape(fields: &[&str]) -> bool {
    match fields.len() {
        3 => fields.iter().all(|f| !f.is_empty()),
        4 => fields[..3].iter().all(|f| !f.is_empty()) && fields[3].is_empty(),
        _ => false,
    }
}

/// Parse a header line into storm metadata
///
/// The ID field packs `BASIN(2) + CYCLONE_NUMBER(2) + YEAR(4)`. A short
/// ID, non-numeric year or non-numeric entry count makes the header
/// malformed; the caller drops it and skips entries until the next valid
/// header.
pub fn parse_header(fields: &[&str], line_number: usize) -> Result<StormHeader> {
    let id = fields[0];
    if !id.is_ascii() || id.len() < HEADER_ID_LEN {
        return Err(Error::malformed_header(
            line_number,
            format!("storm ID '{}' is not {} ASCII characters", id, HEADER_ID_LEN),
        ));
    }

    let basin = id[..2].to_string();
    let cyclone_number = id[2..4].to_string();
    let year: i32 = id[4..8].parse().map_err(|_| {
        Error::malformed_header(line_number, format!("non-numeric year in storm ID '{}'", id))
    })?;

    let name = fields[1].to_string();
    let declared_entries: usize = fields[2].parse().map_err(|_| {
        Error::malformed_header(
            line_number,
            format!("non-numeric entry count '{}'", fields[2]),
        )
    })?;

    Ok(StormHeader {
        basin,
        cyclone_number,
        year,
        name,
        declared_entries,
    })
}
