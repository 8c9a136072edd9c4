use std::{io, path::PathBuf};

/// Errors surfaced while listing a directory
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The directory could not be opened
    #[error("cannot open directory {}: {}", .path.display(), .reason)]
    OpenDir {
        path: PathBuf,
        reason: String,
        #[source]
        source: io::Error,
    },

    /// The metadata of a single entry could not be read
    #[error("Error accessing {}: {}", .path.display(), .reason)]
    Stat {
        path: PathBuf,
        reason: String,
        #[source]
        source: io::Error,
    },

    /// The metadata of a single entry could not be formatted
    #[error("Error accessing {}: {}", .path.display(), .source)]
    Format {
        path: PathBuf,
        #[source]
        source: time::error::Format,
    },
}

impl Error {
    pub fn open_dir(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::OpenDir {
            path: path.into(),
            reason: os_reason(&source),
            source,
        }
    }

    pub fn stat(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::Stat {
            path: path.into(),
            reason: os_reason(&source),
            source,
        }
    }

    pub fn format(path: impl Into<PathBuf>, source: time::error::Format) -> Error {
        Error::Format {
            path: path.into(),
            source,
        }
    }
}

/// Describes an I/O error the way `strerror` does, without the
/// `(os error N)` suffix Rust appends to OS errors.
pub fn os_reason(err: &io::Error) -> String {
    let text = err.to_string();
    match err.raw_os_error() {
        Some(code) => text
            .strip_suffix(&format!(" (os error {code})"))
            .map_or_else(|| text.clone(), str::to_string),
        None => text,
    }
}
