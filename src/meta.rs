use std::{fs, io, os::unix::fs::MetadataExt, path::Path};

use bitflags::bitflags;
use time::OffsetDateTime;

mod ident;

pub use ident::Identities;

/// The kind of an entry, as far as the listing cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Anything that is not a directory.
    Regular,
    Directory,
}

impl Kind {
    /// The leading character of the mode string.
    pub fn symbol(self) -> char {
        match self {
            Kind::Regular => '-',
            Kind::Directory => 'd',
        }
    }
}

bitflags! {
    /// The permission bits of an entry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Permissions: u32 {
        const OWNER_READ = libc::S_IRUSR as u32;
        const OWNER_WRITE = libc::S_IWUSR as u32;
        const OWNER_EXECUTE = libc::S_IXUSR as u32;
        const GROUP_READ = libc::S_IRGRP as u32;
        const GROUP_WRITE = libc::S_IWGRP as u32;
        const GROUP_EXECUTE = libc::S_IXGRP as u32;
        const OTHER_READ = libc::S_IROTH as u32;
        const OTHER_WRITE = libc::S_IWOTH as u32;
        const OTHER_EXECUTE = libc::S_IXOTH as u32;
    }
}

/// The display order of the permission bits.
const SYMBOLS: [(Permissions, char); 9] = [
    (Permissions::OWNER_READ, 'r'),
    (Permissions::OWNER_WRITE, 'w'),
    (Permissions::OWNER_EXECUTE, 'x'),
    (Permissions::GROUP_READ, 'r'),
    (Permissions::GROUP_WRITE, 'w'),
    (Permissions::GROUP_EXECUTE, 'x'),
    (Permissions::OTHER_READ, 'r'),
    (Permissions::OTHER_WRITE, 'w'),
    (Permissions::OTHER_EXECUTE, 'x'),
];

impl Permissions {
    /// Extracts the permission bits from a raw `st_mode`.
    pub fn from_mode(mode: u32) -> Permissions {
        Permissions::from_bits_truncate(mode)
    }

    /// Renders the bits as `rwxrwxrwx`, with `-` for unset bits.
    pub fn symbolic(self) -> String {
        SYMBOLS
            .iter()
            .map(|&(bit, c)| if self.contains(bit) { c } else { '-' })
            .collect()
    }
}

/// The metadata shown in the detailed listing.
#[derive(Debug, Clone)]
pub struct EntryMetadata {
    pub kind: Kind,
    pub permissions: Permissions,
    pub link_count: u64,
    pub owner: String,
    pub group: String,
    pub size: u64,
    pub modified: OffsetDateTime,
}

impl EntryMetadata {
    /// Reads the metadata of `path` without following symbolic links.
    pub fn stat(path: &Path, ids: &Identities) -> io::Result<EntryMetadata> {
        let meta = fs::symlink_metadata(path)?;
        let modified = OffsetDateTime::from_unix_timestamp(meta.mtime())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(EntryMetadata {
            kind: if meta.file_type().is_dir() {
                Kind::Directory
            } else {
                Kind::Regular
            },
            permissions: Permissions::from_mode(meta.mode()),
            link_count: meta.nlink(),
            owner: ids.user_name(meta.uid()),
            group: ids.group_name(meta.gid()),
            size: meta.size(),
            modified,
        })
    }

    /// The 10-character type and permission string, e.g. `drwxr-xr-x`.
    pub fn mode_string(&self) -> String {
        let mut mode = String::with_capacity(10);
        mode.push(self.kind.symbol());
        mode.push_str(&self.permissions.symbolic());
        mode
    }
}
