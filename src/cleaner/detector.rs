//! Core trait and types for artifact detection.

use crate::scanner::{DirCache, ListingEntry};
use serde::Serialize;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// An artifact directory found during a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FoundArtifact {
    /// Directory that can be deleted.
    pub path: PathBuf,
    /// Id of the detector that reported it (e.g., "cargo").
    pub artifact_type: String,
    /// Directory the detector was evaluated on.
    pub project: PathBuf,
}

/// One directory as seen by the detectors: its path, its entries and a
/// name index over them.
///
/// Non-emptiness checks on subdirectories go through the traversal's
/// [`DirCache`], so the walker never lists them a second time.
pub struct DirListing<'a> {
    path: &'a Path,
    entries: &'a [ListingEntry],
    index: HashMap<&'a OsStr, &'a ListingEntry>,
    cache: &'a DirCache,
}

impl<'a> DirListing<'a> {
    pub fn new(path: &'a Path, entries: &'a [ListingEntry], cache: &'a DirCache) -> Self {
        let index = entries.iter().map(|e| (e.name.as_os_str(), e)).collect();
        Self {
            path,
            entries,
            index,
            cache,
        }
    }

    pub fn path(&self) -> &Path {
        self.path
    }

    pub fn entries(&self) -> &[ListingEntry] {
        self.entries
    }

    /// Look up an entry by exact name.
    pub fn get(&self, name: &str) -> Option<&ListingEntry> {
        self.index.get(OsStr::new(name)).copied()
    }

    /// True if an entry with this exact name exists (file or directory).
    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(OsStr::new(name))
    }

    /// True if any of the given names exists.
    pub fn has_any(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.has(n))
    }

    /// True if a regular file ends with `suffix`, ignoring ASCII case.
    pub fn has_file_with_suffix(&self, suffix: &str) -> bool {
        let suffix = suffix.to_ascii_lowercase();
        self.entries.iter().any(|e| {
            e.is_file() && e.name.to_string_lossy().to_ascii_lowercase().ends_with(&suffix)
        })
    }

    /// True if any entry (file or directory) ends with `suffix`, case-sensitive.
    pub fn has_name_with_suffix(&self, suffix: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.name.to_string_lossy().ends_with(suffix))
    }

    /// True if `relative` exists below this directory, is a directory and
    /// is not empty.
    pub fn is_non_empty_dir(&self, relative: impl AsRef<Path>) -> bool {
        self.cache.is_non_empty_dir(&self.path.join(relative))
    }

    /// First candidate (in order) that is a non-empty directory.
    pub fn first_non_empty(&self, candidates: &[&str]) -> Option<PathBuf> {
        candidates
            .iter()
            .map(|c| self.path.join(c))
            .find(|p| self.cache.is_non_empty_dir(p))
    }
}

/// Trait for artifact detectors.
///
/// Implement this trait to recognise a new ecosystem. A detector looks at a
/// single directory and reports at most one artifact directory for it:
/// - `markers` say whether the directory is a project root
/// - `artifact_dirs` are the candidates, tried in order
///
/// Detectors must not recurse and must not modify anything.
pub trait ArtifactDetector: Send + Sync {
    /// Unique identifier for this artifact type (e.g., "cargo").
    fn id(&self) -> &'static str;

    /// Human-readable name (e.g., "Rust/Cargo").
    fn display_name(&self) -> &'static str;

    /// Entry names that mark a project root. ANY of them is enough.
    fn markers(&self) -> &'static [&'static str];

    /// Artifact directories relative to the project root, in preference order.
    fn artifact_dirs(&self) -> &'static [&'static str];

    /// Check if the listed directory is a project of this type.
    fn is_project(&self, listing: &DirListing<'_>) -> bool {
        listing.has_any(self.markers())
    }

    /// Return the artifact directory to delete, if any.
    ///
    /// Default implementation: the first non-empty artifact dir of a project.
    fn evaluate(&self, listing: &DirListing<'_>) -> Option<PathBuf> {
        if !self.is_project(listing) {
            return None;
        }
        listing.first_non_empty(self.artifact_dirs())
    }
}
