use std::{
    cmp::Ordering,
    ffi::{OsStr, OsString},
    os::unix::ffi::OsStrExt,
};

/// A directory entry, as returned by the operating system.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The raw name, used to build paths.
    raw: OsString,

    /// The name as sorted and measured.
    name: String,
}

impl Entry {
    /// Creates a new entry from its raw name.
    pub fn new(raw: OsString) -> Entry {
        let name = raw.to_string_lossy().into_owned();
        Entry { raw, name }
    }

    /// The name of the entry, with invalid UTF-8 replaced.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw name of the entry.
    pub fn file_name(&self) -> &OsStr {
        &self.raw
    }

    /// The raw name as written to the output.
    pub fn as_bytes(&self) -> &[u8] {
        self.raw.as_bytes()
    }

    /// The number of characters the name takes in a column.
    pub fn width(&self) -> usize {
        self.name.chars().count()
    }

    /// Whether the entry is hidden, i.e. its name starts with a dot.
    /// This covers `.` and `..` as well.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

impl From<&str> for Entry {
    fn from(name: &str) -> Entry {
        Entry::new(OsString::from(name))
    }
}

/// Compares two names ignoring ASCII case.
/// Names equal under that comparison are ordered by their raw bytes so that
/// the result does not depend on the directory order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.bytes().map(|b| b.to_ascii_lowercase()).collect::<Vec<_>>();
    folded(a).cmp(&folded(b)).then_with(|| a.cmp(b))
}
