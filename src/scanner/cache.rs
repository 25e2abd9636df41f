//! Per-run memoization of directory listings.
//!
//! Every directory is listed at most once per traversal, no matter how many
//! walker tasks or detectors ask for it. Failed listings are remembered too.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use super::entry::{EntryKind, ListingEntry};

/// Shared, immutable listing of one directory, sorted by name.
pub type Listing = Arc<[ListingEntry]>;

/// Outcome of listing a directory. Errors are shared between all callers.
pub type ListingResult = std::result::Result<Listing, Arc<io::Error>>;

/// Source of directory listings.
///
/// The walker only ever talks to the filesystem through this trait.
pub trait DirReader: Send + Sync {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<ListingEntry>>;
}

/// Reads listings from the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsReader;

impl DirReader for FsReader {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<ListingEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // file_type() is usually free; fall back to lstat when the
            // platform did not report it with the entry.
            let kind = match entry.file_type() {
                Ok(ft) => EntryKind::from_file_type(ft),
                Err(_) => fs::symlink_metadata(entry.path())
                    .map(|m| EntryKind::from_file_type(m.file_type()))
                    .unwrap_or(EntryKind::Unknown),
            };
            entries.push(ListingEntry::new(entry.file_name(), kind));
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

type Slot = Arc<OnceLock<ListingResult>>;

/// Concurrent read-once cache of directory listings, keyed by path.
///
/// The map lock is only held to find or create a path's slot; the listing
/// itself happens outside of it, and concurrent first readers of the same
/// path wait on that slot instead of listing it again.
pub struct DirCache {
    reader: Arc<dyn DirReader>,
    slots: Mutex<HashMap<PathBuf, Slot>>,
}

impl DirCache {
    /// Create a cache backed by the real filesystem.
    pub fn new() -> Self {
        Self::with_reader(Arc::new(FsReader))
    }

    /// Create a cache backed by a custom reader.
    pub fn with_reader(reader: Arc<dyn DirReader>) -> Self {
        Self {
            reader,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// List `path`, reading it from the underlying reader only on first use.
    pub fn read(&self, path: &Path) -> ListingResult {
        let slot = self.slot(path);

        slot.get_or_init(|| match self.reader.read_dir(path) {
            Ok(entries) => Ok(Listing::from(entries)),
            Err(err) => Err(Arc::new(err)),
        })
        .clone()
    }

    /// True if `path` can be listed and has at least one entry.
    pub fn is_non_empty_dir(&self, path: &Path) -> bool {
        self.read(path).map(|entries| !entries.is_empty()).unwrap_or(false)
    }

    /// Number of distinct paths requested so far.
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }

    fn slot(&self, path: &Path) -> Slot {
        let mut slots = self.slots.lock();
        if let Some(slot) = slots.get(path) {
            return Arc::clone(slot);
        }
        let slot = Slot::default();
        slots.insert(path.to_path_buf(), Arc::clone(&slot));
        slot
    }
}

impl Default for DirCache {
    fn default() -> Self {
        Self::new()
    }
}
