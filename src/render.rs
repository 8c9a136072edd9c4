use std::{io::Write, num::NonZeroUsize};

use anyhow::Result;
use time::UtcOffset;

use crate::listing::Listing;

mod grid;
mod long;
mod simple;

/// How a listing is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// One name per line.
    Simple,

    /// One metadata line per entry.
    Detailed,

    /// Names filled down then across a fixed number of columns.
    ColumnGrid { columns: NonZeroUsize },
}

impl RenderMode {
    /// Selects the mode from the command-line flags.
    /// The detailed listing wins when both flags are set.
    pub fn from_flags(long: bool, grid: bool, columns: NonZeroUsize) -> RenderMode {
        if long {
            RenderMode::Detailed
        } else if grid {
            RenderMode::ColumnGrid { columns }
        } else {
            RenderMode::Simple
        }
    }
}

/// What happened while rendering a listing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Entries written to the output.
    pub listed: usize,

    /// Entries skipped because their metadata could not be read.
    pub skipped: usize,
}

/// Writes `listing` to `out` in the given mode.
///
/// Per-entry failures are written to `err` and do not stop the listing.
/// Timestamps are shown at `offset`.
pub fn render<W, E>(
    mode: RenderMode,
    listing: &Listing,
    offset: UtcOffset,
    out: &mut W,
    err: &mut E,
) -> Result<Report>
where
    W: Write,
    E: Write,
{
    let report = match mode {
        RenderMode::Simple => simple::write(listing, out)?,
        RenderMode::Detailed => long::write(listing, offset, out, err)?,
        RenderMode::ColumnGrid { columns } => grid::write(listing, columns, out)?,
    };
    out.flush()?;
    Ok(report)
}
