use std::{
    io::{self, Write},
    num::NonZeroUsize,
};

use crate::listing::{Entry, Listing};

use super::Report;

/// The separator written after every cell, including the last of a row.
const GUTTER: &[u8] = b"  ";

/// Writes the names in `columns` columns, filling each column top to bottom
/// before moving to the next one.
///
/// Every cell is padded to the longest name, counted in characters.
pub fn write<W: Write>(
    listing: &Listing,
    columns: NonZeroUsize,
    out: &mut W,
) -> io::Result<Report> {
    let entries = listing.entries();
    if entries.is_empty() {
        return Ok(Report::default());
    }

    let columns = columns.get();
    let rows = entries.len().div_ceil(columns);
    let width = entries.iter().map(Entry::width).max().unwrap_or(0);

    for row in 0..rows {
        for col in 0..columns {
            if let Some(entry) = entries.get(col * rows + row) {
                out.write_all(entry.as_bytes())?;
                write!(out, "{:pad$}", "", pad = width - entry.width())?;
                out.write_all(GUTTER)?;
            }
        }
        writeln!(out)?;
    }

    Ok(Report {
        listed: entries.len(),
        skipped: 0,
    })
}
