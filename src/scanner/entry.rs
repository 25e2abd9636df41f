use std::ffi::{OsStr, OsString};
use std::fs::FileType;

/// What a directory entry turned out to be when it was listed.
///
/// Symlinks are never resolved, so a link to a directory is `Symlink`, not `Dir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Symlink,
    /// The file type could not be determined.
    Unknown,
}

impl EntryKind {
    pub fn from_file_type(ft: FileType) -> Self {
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        }
    }
}

/// A single entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Entry name (last component of the path)
    pub name: OsString,

    /// Entry type, as seen without following symlinks
    pub kind: EntryKind,
}

impl ListingEntry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self::new(name, EntryKind::Dir)
    }

    pub fn file(name: impl Into<OsString>) -> Self {
        Self::new(name, EntryKind::File)
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}
