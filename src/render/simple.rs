use std::io::{self, Write};

use crate::listing::Listing;

use super::Report;

/// Writes one name per line.
pub fn write<W: Write>(listing: &Listing, out: &mut W) -> io::Result<Report> {
    for entry in listing.entries() {
        out.write_all(entry.as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(Report {
        listed: listing.len(),
        skipped: 0,
    })
}
