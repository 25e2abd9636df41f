//! Concurrent, depth-bounded artifact walker.
//!
//! Each visited directory is listed once through the [`DirCache`], every
//! registered detector runs against the listing, matches are sent to a
//! bounded result channel, and child directories are visited either on a
//! new pool task (if a slot is free) or inline on the current one.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam_channel as channel;

use crate::cleaner::{DetectorRegistry, DirListing, FoundArtifact};
use crate::error::{Result, SweeperError};

use super::cache::{DirCache, DirReader, FsReader};
use super::entry::EntryKind;
use super::options::WalkOptions;
use super::progress::{ProgressCounter, SlotPool};

/// Results buffered before producers block on the consumer.
pub const RESULT_BUFFER: usize = 100;

/// Stack size for walker threads. Inline visits recurse once per level, and
/// the depth limit allows a thousand of them.
const WALK_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Walks a directory tree looking for artifact directories.
pub struct Walker {
    options: WalkOptions,
    registry: DetectorRegistry,
    reader: Arc<dyn DirReader>,
}

impl Walker {
    pub fn new(options: WalkOptions, registry: DetectorRegistry) -> Self {
        Self {
            options,
            registry,
            reader: Arc::new(FsReader),
        }
    }

    /// Read directories through a custom reader instead of the filesystem.
    pub fn with_reader(mut self, reader: Arc<dyn DirReader>) -> Self {
        self.reader = reader;
        self
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    pub fn registry(&self) -> &DetectorRegistry {
        &self.registry
    }

    /// Start walking `root` in the background.
    ///
    /// Results arrive on the returned [`Traversal`] while the walk runs; the
    /// stream ends once every directory has been processed.
    pub fn start(&self, root: &Path) -> Result<Traversal> {
        let (tx, rx) = channel::bounded(RESULT_BUFFER);
        let progress = Arc::new(ProgressCounter::new());
        let slots = Arc::new(SlotPool::new(self.options.concurrency));

        // Pool size 0 means no pool: every visit runs inline.
        let pool = if self.options.concurrency > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.options.concurrency)
                .stack_size(WALK_STACK_SIZE)
                .thread_name(|i| format!("sweeper-walk-{}", i))
                .build()
                .map_err(|e| SweeperError::Traversal(e.to_string()))?;
            Some(pool)
        } else {
            None
        };

        let context = TraversalContext {
            options: self.options.clone(),
            registry: self.registry.clone(),
            cache: DirCache::with_reader(Arc::clone(&self.reader)),
            progress: Arc::clone(&progress),
            slots: Arc::clone(&slots),
            results: tx,
        };

        let root = root.to_path_buf();
        let handle = thread::Builder::new()
            .name("sweeper-root".to_string())
            .stack_size(WALK_STACK_SIZE)
            .spawn(move || context.run(root, pool))
            .map_err(|e| SweeperError::Traversal(e.to_string()))?;

        Ok(Traversal {
            results: rx,
            progress,
            slots,
            handle: Some(handle),
        })
    }

    /// Walk `root` to completion and return everything found.
    pub fn run(&self, root: &Path) -> Result<Vec<FoundArtifact>> {
        self.start(root)?.collect()
    }
}

/// A running traversal: the result stream plus its progress.
pub struct Traversal {
    results: channel::Receiver<FoundArtifact>,
    progress: Arc<ProgressCounter>,
    slots: Arc<SlotPool>,
    handle: Option<JoinHandle<()>>,
}

impl Traversal {
    /// The result stream. Closed once the walk is complete.
    pub fn results(&self) -> &channel::Receiver<FoundArtifact> {
        &self.results
    }

    /// Blocking iterator over results, in discovery order.
    pub fn iter(&self) -> channel::Iter<'_, FoundArtifact> {
        self.results.iter()
    }

    /// Handle to the directories-processed counter.
    pub fn progress(&self) -> Arc<ProgressCounter> {
        Arc::clone(&self.progress)
    }

    /// Highest number of pool slots held at once so far.
    pub fn peak_concurrency(&self) -> usize {
        self.slots.peak()
    }

    /// True once every directory has been processed.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Drain all remaining results and wait for the walk to end.
    pub fn collect(mut self) -> Result<Vec<FoundArtifact>> {
        let found: Vec<FoundArtifact> = self.results.iter().collect();
        self.wait()?;
        Ok(found)
    }

    /// Wait for the walk to end. Results not yet consumed are discarded.
    pub fn join(mut self) -> Result<()> {
        // Replace the receiver so blocked producers see a closed channel.
        let (_, closed) = channel::bounded(0);
        drop(std::mem::replace(&mut self.results, closed));
        self.wait()
    }

    fn wait(&mut self) -> Result<()> {
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| SweeperError::Traversal("walker thread panicked".to_string())),
            None => Ok(()),
        }
    }
}

/// Everything a traversal shares between its tasks.
struct TraversalContext {
    options: WalkOptions,
    registry: DetectorRegistry,
    cache: DirCache,
    progress: Arc<ProgressCounter>,
    slots: Arc<SlotPool>,
    results: channel::Sender<FoundArtifact>,
}

impl TraversalContext {
    /// Walk from `root` until all work is done; dropping `self` afterwards
    /// closes the result channel.
    fn run(self, root: PathBuf, pool: Option<rayon::ThreadPool>) {
        let started = Instant::now();
        tracing::debug!(
            root = %root.display(),
            max_depth = self.options.max_depth,
            concurrency = self.options.concurrency,
            detectors = self.registry.len(),
            "Starting traversal"
        );

        match &pool {
            Some(pool) => pool.in_place_scope(|scope| self.visit(Some(scope), root, 0)),
            None => self.visit(None, root, 0),
        }

        tracing::debug!(
            directories = self.progress.get(),
            cached = self.cache.len(),
            peak_concurrency = self.slots.peak(),
            elapsed = ?started.elapsed(),
            "Traversal finished"
        );
    }

    fn visit<'s>(&'s self, scope: Option<&rayon::Scope<'s>>, dir: PathBuf, depth: usize) {
        if depth >= self.options.max_depth {
            tracing::trace!(path = %dir.display(), depth, "Depth limit reached");
            return;
        }

        let entries = match self.cache.read(&dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::trace!(path = %dir.display(), error = %err, "Skipping unreadable directory");
                return;
            }
        };

        let listing = DirListing::new(&dir, &entries, &self.cache);
        for (artifact_type, path) in self.registry.evaluate(&listing) {
            tracing::debug!(path = %path.display(), artifact_type, "Found artifact");
            let found = FoundArtifact {
                path,
                artifact_type: artifact_type.to_string(),
                project: dir.clone(),
            };
            // A consumer that hung up no longer wants results; keep walking
            // so the traversal still terminates normally.
            let _ = self.results.send(found);
        }

        for entry in entries.iter() {
            match entry.kind {
                EntryKind::Dir => {}
                EntryKind::Symlink | EntryKind::Unknown => {
                    tracing::trace!(path = %dir.join(&entry.name).display(), kind = ?entry.kind, "Not following");
                    continue;
                }
                EntryKind::File => continue,
            }
            if self.options.is_skipped(&entry.name) {
                continue;
            }
            self.schedule(scope, dir.join(&entry.name), depth + 1);
        }

        self.progress.increment();
    }

    /// Run a child visit on a new task if a slot is free, otherwise inline.
    fn schedule<'s>(&'s self, scope: Option<&rayon::Scope<'s>>, dir: PathBuf, depth: usize) {
        if let Some(scope) = scope {
            if let Some(slot) = self.slots.try_acquire() {
                scope.spawn(move |scope| {
                    let _slot = slot;
                    self.visit(Some(scope), dir, depth);
                });
                return;
            }
        }
        self.visit(scope, dir, depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::ListingEntry;
    use std::collections::HashMap;
    use std::fs;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tempfile::TempDir;

    fn cargo_project(dir: &Path) {
        fs::create_dir_all(dir.join("target/debug")).unwrap();
        fs::write(dir.join("Cargo.toml"), "[package]").unwrap();
        fs::write(dir.join("target/debug/app"), "x".repeat(100)).unwrap();
    }

    fn walk(root: &Path, options: WalkOptions) -> Vec<FoundArtifact> {
        Walker::new(options, DetectorRegistry::new()).run(root).unwrap()
    }

    /// In-memory tree that records every read and how many overlap.
    #[derive(Default)]
    struct RecordingReader {
        tree: HashMap<PathBuf, Vec<ListingEntry>>,
        reads: parking_lot::Mutex<Vec<PathBuf>>,
        active: AtomicUsize,
        max_active: AtomicUsize,
        delay: Duration,
    }

    impl RecordingReader {
        /// A root with `width` children, each with `width` empty children.
        fn wide(width: usize, delay: Duration) -> Self {
            let mut tree = HashMap::new();
            let root = PathBuf::from("/root");
            let children: Vec<_> = (0..width).map(|i| ListingEntry::dir(format!("d{}", i))).collect();
            for i in 0..width {
                let child = root.join(format!("d{}", i));
                let leaves: Vec<_> = (0..width).map(|j| ListingEntry::dir(format!("l{}", j))).collect();
                for j in 0..width {
                    tree.insert(child.join(format!("l{}", j)), Vec::new());
                }
                tree.insert(child, leaves);
            }
            tree.insert(root, children);
            Self {
                tree,
                delay,
                ..Default::default()
            }
        }

        fn read_count(&self) -> usize {
            self.reads.lock().len()
        }

        fn was_read(&self, path: &Path) -> bool {
            self.reads.lock().iter().any(|p| p == path)
        }
    }

    impl DirReader for RecordingReader {
        fn read_dir(&self, path: &Path) -> io::Result<Vec<ListingEntry>> {
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_active.fetch_max(now, Ordering::SeqCst);
            self.reads.lock().push(path.to_path_buf());
            thread::sleep(self.delay);
            self.active.fetch_sub(1, Ordering::SeqCst);
            self.tree
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }
    }

    #[test]
    fn test_finds_project_artifacts() {
        let tmp = TempDir::new().unwrap();
        cargo_project(&tmp.path().join("proj-a"));

        let found = walk(tmp.path(), WalkOptions::default());

        assert_eq!(
            found,
            vec![FoundArtifact {
                path: tmp.path().join("proj-a/target"),
                artifact_type: "cargo".to_string(),
                project: tmp.path().join("proj-a"),
            }]
        );
    }

    #[test]
    fn test_root_itself_can_be_a_project() {
        let tmp = TempDir::new().unwrap();
        cargo_project(tmp.path());

        let found = walk(tmp.path(), WalkOptions::default());

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, tmp.path().join("target"));
    }

    #[test]
    fn test_skip_dirs_are_not_descended() {
        let tmp = TempDir::new().unwrap();
        cargo_project(tmp.path());
        // a project nested inside an artifact directory must not be reported
        cargo_project(&tmp.path().join("target/debug/build/nested"));
        cargo_project(&tmp.path().join("node_modules/pkg"));

        let found = walk(tmp.path(), WalkOptions::default());

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, tmp.path().join("target"));
    }

    #[test]
    fn test_skip_dirs_are_never_visited() {
        let mut reader = RecordingReader::default();
        let root = PathBuf::from("/r");
        reader.tree.insert(
            root.clone(),
            vec![ListingEntry::dir("node_modules"), ListingEntry::dir("src")],
        );
        reader
            .tree
            .insert(root.join("node_modules"), vec![ListingEntry::dir("pkg")]);
        reader.tree.insert(root.join("node_modules/pkg"), vec![]);
        reader.tree.insert(root.join("src"), vec![]);
        let reader = Arc::new(reader);

        let walker = Walker::new(WalkOptions::default(), DetectorRegistry::new())
            .with_reader(reader.clone());
        let traversal = walker.start(&root).unwrap();
        let progress = traversal.progress();
        assert!(traversal.collect().unwrap().is_empty());

        assert!(reader.was_read(&root.join("src")));
        assert!(!reader.was_read(&root.join("node_modules")));
        assert!(!reader.was_read(&root.join("node_modules/pkg")));
        assert_eq!(progress.get(), 2);
    }

    #[test]
    fn test_custom_skip_set() {
        let tmp = TempDir::new().unwrap();
        cargo_project(&tmp.path().join("archive/old"));
        cargo_project(&tmp.path().join("live"));

        let options = WalkOptions::default().with_extra_skip_dirs(["archive"]);
        let found = walk(tmp.path(), options);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].project, tmp.path().join("live"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_not_followed() {
        let outside = TempDir::new().unwrap();
        cargo_project(&outside.path().join("elsewhere"));

        let tmp = TempDir::new().unwrap();
        std::os::unix::fs::symlink(outside.path(), tmp.path().join("link")).unwrap();

        let found = walk(tmp.path(), WalkOptions::default());
        assert!(found.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_terminates() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("a")).unwrap();
        std::os::unix::fs::symlink(tmp.path(), tmp.path().join("a/loop")).unwrap();
        cargo_project(&tmp.path().join("a/proj"));

        let found = walk(tmp.path(), WalkOptions::default());
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_max_depth_truncates_walk() {
        let tmp = TempDir::new().unwrap();
        // proj sits at depth 4 (root = 0)
        let proj = tmp.path().join("a/b/c/proj");
        cargo_project(&proj);

        assert!(walk(tmp.path(), WalkOptions::default().with_max_depth(4)).is_empty());
        assert_eq!(walk(tmp.path(), WalkOptions::default().with_max_depth(5)).len(), 1);
    }

    #[test]
    fn test_max_depth_zero_reads_nothing() {
        let reader = Arc::new(RecordingReader::wide(3, Duration::ZERO));

        let walker = Walker::new(WalkOptions::default().with_max_depth(0), DetectorRegistry::new())
            .with_reader(reader.clone());
        let found = walker.run(Path::new("/root")).unwrap();

        assert!(found.is_empty());
        assert_eq!(reader.read_count(), 0);
    }

    #[test]
    fn test_no_reads_below_depth_limit() {
        let reader = Arc::new(RecordingReader::wide(3, Duration::ZERO));

        let walker = Walker::new(WalkOptions::default().with_max_depth(2), DetectorRegistry::new())
            .with_reader(reader.clone());
        walker.run(Path::new("/root")).unwrap();

        // root + 3 children; the 9 leaves at depth 2 are never listed
        assert_eq!(reader.read_count(), 4);
        assert!(!reader.was_read(Path::new("/root/d0/l0")));
    }

    #[test]
    fn test_unreadable_directories_are_skipped() {
        let mut reader = RecordingReader::default();
        let root = PathBuf::from("/r");
        reader.tree.insert(
            root.clone(),
            vec![ListingEntry::dir("gone"), ListingEntry::dir("ok")],
        );
        reader.tree.insert(root.join("ok"), vec![]);
        let reader = Arc::new(reader);

        let walker = Walker::new(WalkOptions::default(), DetectorRegistry::new())
            .with_reader(reader.clone());
        let traversal = walker.start(&root).unwrap();
        let progress = traversal.progress();
        traversal.collect().unwrap();

        assert!(reader.was_read(&root.join("gone")));
        assert_eq!(progress.get(), 2);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        let found = walk(&tmp.path().join("missing"), WalkOptions::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_every_directory_visited_once_under_pressure() {
        for concurrency in [0, 1, 2, 8] {
            let reader = Arc::new(RecordingReader::wide(6, Duration::ZERO));
            let walker = Walker::new(
                WalkOptions::default().with_concurrency(concurrency),
                DetectorRegistry::new(),
            )
            .with_reader(reader.clone());

            let traversal = walker.start(Path::new("/root")).unwrap();
            let progress = traversal.progress();
            traversal.collect().unwrap();

            // 1 root + 6 children + 36 leaves
            assert_eq!(reader.read_count(), 43, "concurrency {}", concurrency);
            assert_eq!(progress.get(), 43, "concurrency {}", concurrency);
        }
    }

    #[test]
    fn test_concurrency_never_exceeds_pool() {
        for concurrency in [0, 1, 3] {
            let reader = Arc::new(RecordingReader::wide(5, Duration::from_millis(2)));
            let walker = Walker::new(
                WalkOptions::default().with_concurrency(concurrency),
                DetectorRegistry::new(),
            )
            .with_reader(reader.clone());

            let traversal = walker.start(Path::new("/root")).unwrap();
            let slots = Arc::clone(&traversal.slots);
            traversal.collect().unwrap();

            assert!(slots.peak() <= concurrency, "concurrency {}", concurrency);
            assert_eq!(slots.in_use(), 0);
            // the root task plus at most one task per slot
            let max_active = reader.max_active.load(Ordering::SeqCst);
            assert!(max_active <= concurrency + 1, "concurrency {}: {}", concurrency, max_active);
        }
    }

    #[test]
    fn test_synchronous_walk_is_single_threaded() {
        let reader = Arc::new(RecordingReader::wide(4, Duration::from_millis(1)));
        let walker = Walker::new(WalkOptions::default().with_concurrency(0), DetectorRegistry::new())
            .with_reader(reader.clone());

        let traversal = walker.start(Path::new("/root")).unwrap();
        assert_eq!(traversal.peak_concurrency(), 0);
        traversal.collect().unwrap();

        assert_eq!(reader.max_active.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_slow_consumer_loses_nothing() {
        let tmp = TempDir::new().unwrap();
        let count = RESULT_BUFFER + 20;
        for i in 0..count {
            cargo_project(&tmp.path().join(format!("p{}", i)));
        }

        let walker = Walker::new(WalkOptions::default().with_concurrency(4), DetectorRegistry::new());
        let traversal = walker.start(tmp.path()).unwrap();

        let mut found = 0;
        for _ in traversal.iter() {
            if found == 0 {
                thread::sleep(Duration::from_millis(50));
            }
            found += 1;
        }

        assert_eq!(found, count);
        traversal.join().unwrap();
    }

    #[test]
    fn test_join_without_consuming() {
        let tmp = TempDir::new().unwrap();
        for i in 0..(RESULT_BUFFER * 2) {
            cargo_project(&tmp.path().join(format!("p{}", i)));
        }

        let walker = Walker::new(WalkOptions::default(), DetectorRegistry::new());
        let traversal = walker.start(tmp.path()).unwrap();

        traversal.join().unwrap();
    }

    #[test]
    fn test_filtered_registry() {
        let tmp = TempDir::new().unwrap();
        cargo_project(&tmp.path().join("rust"));
        let web = tmp.path().join("web");
        fs::create_dir_all(web.join("node_modules/left-pad")).unwrap();
        fs::write(web.join("package.json"), "{}").unwrap();
        fs::write(web.join("node_modules/left-pad/index.js"), "x").unwrap();

        let walker = Walker::new(WalkOptions::default(), DetectorRegistry::with_types(&["node"]));
        let found = walker.run(tmp.path()).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].artifact_type, "node");
    }
}
