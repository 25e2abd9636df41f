use std::collections::HashSet;
use std::ffi::{OsStr, OsString};

/// Default recursion limit, deep enough for any real project tree.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Default number of directory visits allowed to run concurrently.
pub const DEFAULT_CONCURRENCY: usize = 50;

/// Directory names never descended into: known build output and tool state,
/// not project roots.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "target",
    "node_modules",
    "CMakeFiles",
    "build",
    "bin",
    "obj",
    "dist",
    ".gradle",
    ".idea",
    ".vscode",
    ".dub",
    ".build",
];

/// Configuration for one traversal. Fixed once the walk starts.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Directories at this depth or deeper are not read (root is depth 0)
    pub max_depth: usize,

    /// Size of the concurrency pool (0 = fully synchronous)
    pub concurrency: usize,

    /// Child directory names that are never visited
    pub skip_dirs: HashSet<OsString>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            concurrency: DEFAULT_CONCURRENCY,
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(OsString::from).collect(),
        }
    }
}

impl WalkOptions {
    /// Create a new WalkOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum recursion depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the concurrency pool size
    pub fn with_concurrency(mut self, slots: usize) -> Self {
        self.concurrency = slots;
        self
    }

    /// Replace the skip-set
    pub fn with_skip_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.skip_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add names to the skip-set
    pub fn with_extra_skip_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.skip_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Check if a child directory with this name must not be visited
    pub fn is_skipped(&self, name: &OsStr) -> bool {
        self.skip_dirs.contains(name)
    }
}
