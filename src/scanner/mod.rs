//! The traversal engine: cached directory listings, the concurrent walker,
//! and its progress counters.

mod cache;
mod entry;
mod options;
mod progress;
mod walker;

pub use cache::{DirCache, DirReader, FsReader, Listing, ListingResult};
pub use entry::{EntryKind, ListingEntry};
pub use options::{WalkOptions, DEFAULT_CONCURRENCY, DEFAULT_MAX_DEPTH, DEFAULT_SKIP_DIRS};
pub use progress::{ProgressCounter, SlotGuard, SlotPool};
pub use walker::{Traversal, Walker, RESULT_BUFFER};
