use std::{ffi::OsStr, io::Write, os::unix::ffi::OsStrExt};

use anyhow::Result;
use time::{format_description::BorrowedFormatItem, macros::format_description, UtcOffset};

use crate::{
    error::Error,
    listing::Listing,
    meta::{EntryMetadata, Identities},
};

use super::Report;

/// `Mon DD HH:MM`, with a space-padded day.
const MTIME_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[month repr:short] [day padding:space] [hour]:[minute]");

/// Writes one metadata line per entry.
///
/// Entries whose metadata cannot be read or formatted are reported on `err`
/// and skipped.
pub fn write<W, E>(
    listing: &Listing,
    offset: UtcOffset,
    out: &mut W,
    err: &mut E,
) -> Result<Report>
where
    W: Write,
    E: Write,
{
    let ids = Identities::new();
    let mut report = Report::default();

    for entry in listing.entries() {
        let path = listing.path_of(entry);
        let line = EntryMetadata::stat(&path, &ids)
            .map_err(|e| Error::stat(&path, e))
            .and_then(|meta| {
                format_line(&meta, entry.file_name(), offset).map_err(|e| Error::format(&path, e))
            });

        match line {
            Ok(line) => {
                out.write_all(&line)?;
                out.write_all(b"\n")?;
                report.listed += 1;
            }
            Err(failure) => {
                debug!(err = %failure, "skipping entry");
                writeln!(err, "{failure}")?;
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Formats a detailed listing line:
/// mode, links, owner, group, size, modification time and the raw name.
///
/// Times that cannot be shown at `offset` are shown in UTC.
pub fn format_line(
    meta: &EntryMetadata,
    name: &OsStr,
    offset: UtcOffset,
) -> Result<Vec<u8>, time::error::Format> {
    let modified = meta
        .modified
        .checked_to_offset(offset)
        .unwrap_or(meta.modified)
        .format(MTIME_FORMAT)?;

    let mut line = format!(
        "{} {:>2} {:<8} {:<8} {:>8} {} ",
        meta.mode_string(),
        meta.link_count,
        meta.owner,
        meta.group,
        meta.size,
        modified,
    )
    .into_bytes();
    line.extend_from_slice(name.as_bytes());
    Ok(line)
}
