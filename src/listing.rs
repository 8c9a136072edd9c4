use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::Error;

mod entry;

pub use entry::{compare_names, Entry};

/// The sorted, non-hidden entries of a directory.
#[derive(Debug)]
pub struct Listing {
    dir: PathBuf,
    entries: Vec<Entry>,
}

impl Listing {
    /// Reads the entries of the directory at `path`.
    ///
    /// Hidden entries are skipped. At most `max_entries` entries are kept,
    /// the remaining ones are dropped without notice. The directory is
    /// closed before the entries are sorted.
    pub fn read(path: &Path, max_entries: usize) -> Result<Listing, Error> {
        let mut entries = Vec::new();
        {
            let dir = fs::read_dir(path).map_err(|e| Error::open_dir(path, e))?;
            for dent in dir {
                let dent = match dent {
                    Ok(dent) => dent,
                    Err(err) => {
                        warn!(dir = %path.display(), err = %err, "skipping unreadable entry");
                        continue;
                    }
                };

                let entry = Entry::new(dent.file_name());
                if entry.is_hidden() {
                    continue;
                }
                if entries.len() == max_entries {
                    debug!(limit = max_entries, "entry limit reached, dropping the rest");
                    break;
                }
                entries.push(entry);
            }
        }

        Ok(Listing::from_entries(path, entries))
    }

    /// Builds a listing from already collected entries, sorting them.
    pub fn from_entries(dir: &Path, mut entries: Vec<Entry>) -> Listing {
        entries.retain(|entry| !entry.is_hidden());
        entries.sort_by(|a, b| compare_names(a.name(), b.name()));
        Listing {
            dir: dir.to_path_buf(),
            entries,
        }
    }

    /// The entries, in display order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The display names, in display order.
    #[cfg(test)]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::name)
    }

    /// The full path of an entry.
    pub fn path_of(&self, entry: &Entry) -> PathBuf {
        self.dir.join(entry.file_name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            File::create(dir.join(name)).unwrap();
        }
    }

    #[test]
    fn sorts_case_insensitively_and_skips_hidden() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["banana", "Apple", "cherry", ".hidden"]);
        fs::create_dir(dir.path().join(".config")).unwrap();

        let listing = Listing::read(dir.path(), 1024).unwrap();
        assert_eq!(
            listing.names().collect::<Vec<_>>(),
            ["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn reading_twice_yields_the_same_listing() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["b", "a", "C"]);

        let first = Listing::read(dir.path(), 1024).unwrap();
        let second = Listing::read(dir.path(), 1024).unwrap();
        assert!(first.names().eq(second.names()));
    }

    #[test]
    fn empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &[".only-hidden"]);

        let listing = Listing::read(dir.path(), 1024).unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn missing_directory_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = Listing::read(&missing, 1024).unwrap_err();
        assert!(matches!(err, Error::OpenDir { ref path, .. } if *path == missing));
        assert!(err.to_string().ends_with(": No such file or directory"));
    }

    #[test]
    fn regular_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["file"]);

        let err = Listing::read(&dir.path().join("file"), 1024).unwrap_err();
        assert!(matches!(err, Error::OpenDir { .. }));
    }

    #[test]
    fn truncates_at_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
        touch(dir.path(), &names);

        let listing = Listing::read(dir.path(), 5).unwrap();
        assert_eq!(listing.len(), 5);

        let kept = listing.names().collect::<Vec<_>>();
        assert!(kept.iter().all(|name| names.contains(name)));
        assert!(kept.windows(2).all(|w| compare_names(w[0], w[1]).is_lt()));
    }

    #[test]
    fn truncates_at_the_default_limit() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..1030 {
            File::create(dir.path().join(format!("file{i:04}"))).unwrap();
        }

        let listing = Listing::read(dir.path(), 1024).unwrap();
        assert_eq!(listing.len(), 1024);
    }

    #[test]
    fn hidden_entries_do_not_count_towards_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &[".a", ".b", ".c", "x", "y"]);

        let listing = Listing::read(dir.path(), 2).unwrap();
        assert_eq!(listing.names().collect::<Vec<_>>(), ["x", "y"]);
    }

    #[test]
    fn paths_are_joined_to_the_directory() {
        let listing = Listing::from_entries(Path::new("some/dir"), vec![Entry::from("f")]);
        assert_eq!(
            listing.path_of(&listing.entries()[0]),
            Path::new("some/dir/f")
        );
    }
}
