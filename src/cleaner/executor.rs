//! Executor for removing artifact directories.
//!
//! Runs after the traversal, one confirmed artifact at a time.

use crate::cleaner::detector::FoundArtifact;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Result of removing one artifact.
#[derive(Debug, Clone)]
pub enum CleanResult {
    /// The directory was removed.
    Removed {
        artifact: FoundArtifact,
        freed_bytes: u64,
    },
    /// Removal failed.
    Failed {
        artifact: FoundArtifact,
        error: String,
    },
    /// Nothing was done.
    Skipped {
        artifact: FoundArtifact,
        reason: String,
    },
}

impl CleanResult {
    pub fn artifact(&self) -> &FoundArtifact {
        match self {
            CleanResult::Removed { artifact, .. }
            | CleanResult::Failed { artifact, .. }
            | CleanResult::Skipped { artifact, .. } => artifact,
        }
    }
}

/// Options for the clean executor.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// If true, don't actually delete anything.
    pub dry_run: bool,
    /// If true, sum file sizes before deleting to report freed space.
    pub measure: bool,
}

/// Summary of cleaning results.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanSummary {
    /// Number of removed artifact directories.
    pub removed_count: usize,
    /// Number of failed removals.
    pub failed_count: usize,
    /// Number of skipped artifacts.
    pub skipped_count: usize,
    /// Total bytes freed.
    pub total_freed: u64,
}

/// Executor for removing artifact directories.
pub struct CleanExecutor {
    options: CleanOptions,
}

impl CleanExecutor {
    /// Create a new executor with the given options.
    pub fn new(options: CleanOptions) -> Self {
        Self { options }
    }

    /// Remove a single artifact directory.
    ///
    /// Failures are reported in the result, never raised, so one stubborn
    /// directory does not stop the remaining removals.
    pub fn remove(&self, artifact: &FoundArtifact) -> CleanResult {
        let path = &artifact.path;

        if !path.exists() {
            return CleanResult::Skipped {
                artifact: artifact.clone(),
                reason: "already removed".to_string(),
            };
        }

        let size = if self.options.measure {
            Self::dir_size(path)
        } else {
            0
        };

        if self.options.dry_run {
            return CleanResult::Removed {
                artifact: artifact.clone(),
                freed_bytes: size,
            };
        }

        match fs::remove_dir_all(path) {
            Ok(()) => CleanResult::Removed {
                artifact: artifact.clone(),
                freed_bytes: size,
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove artifact");
                CleanResult::Failed {
                    artifact: artifact.clone(),
                    error: e.to_string(),
                }
            }
        }
    }

    /// Total size of the regular files below `path`, not following symlinks.
    pub fn dir_size(path: &Path) -> u64 {
        WalkDir::new(path)
            .into_iter()
            .flatten()
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| e.metadata().ok())
            .map(|m| m.len())
            .sum()
    }

    /// Get summary statistics from results.
    pub fn summarize(results: &[CleanResult]) -> CleanSummary {
        let mut summary = CleanSummary::default();

        for result in results {
            match result {
                CleanResult::Removed { freed_bytes, .. } => {
                    summary.removed_count += 1;
                    summary.total_freed += freed_bytes;
                }
                CleanResult::Failed { .. } => {
                    summary.failed_count += 1;
                }
                CleanResult::Skipped { .. } => {
                    summary.skipped_count += 1;
                }
            }
        }

        summary
    }
}
