//! Detector registry for managing artifact detectors.

use crate::cleaner::detectors::all_detectors;
use crate::cleaner::{ArtifactDetector, DirListing};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

/// Registry that holds the detectors run against every visited directory.
///
/// Fixed once a traversal starts; filtering by type backs CLI options like
/// `--types cargo,node`.
#[derive(Clone)]
pub struct DetectorRegistry {
    detectors: Vec<Arc<dyn ArtifactDetector>>,
}

impl DetectorRegistry {
    /// Create a registry with all built-in detectors.
    pub fn new() -> Self {
        Self {
            detectors: all_detectors(),
        }
    }

    /// Create a registry with no detectors at all.
    pub fn empty() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// Create a registry with only the specified detector types.
    ///
    /// # Example
    /// ```
    /// use artifact_sweeper::cleaner::DetectorRegistry;
    ///
    /// let registry = DetectorRegistry::with_types(&["cargo", "node"]);
    /// assert_eq!(registry.len(), 2);
    /// ```
    pub fn with_types(types: &[&str]) -> Self {
        let type_set: HashSet<&str> = types.iter().copied().collect();
        Self {
            detectors: all_detectors()
                .into_iter()
                .filter(|d| type_set.contains(d.id()))
                .collect(),
        }
    }

    /// Create a registry excluding the specified detector types.
    pub fn without_types(types: &[&str]) -> Self {
        let type_set: HashSet<&str> = types.iter().copied().collect();
        Self {
            detectors: all_detectors()
                .into_iter()
                .filter(|d| !type_set.contains(d.id()))
                .collect(),
        }
    }

    /// Add a detector. A detector with the same id replaces the old one.
    pub fn register(&mut self, detector: Arc<dyn ArtifactDetector>) {
        self.detectors.retain(|d| d.id() != detector.id());
        self.detectors.push(detector);
    }

    /// Get all registered detectors.
    pub fn detectors(&self) -> &[Arc<dyn ArtifactDetector>] {
        &self.detectors
    }

    /// Get a detector by ID.
    pub fn get(&self, id: &str) -> Option<&dyn ArtifactDetector> {
        self.detectors
            .iter()
            .find(|d| d.id() == id)
            .map(|d| d.as_ref())
    }

    /// List all detector IDs.
    pub fn ids(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.id()).collect()
    }

    /// Get the number of registered detectors.
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    /// Run every detector against one directory.
    ///
    /// Returns `(id, artifact path)` for each detector that matched; several
    /// detectors may match the same directory.
    pub fn evaluate(&self, listing: &DirListing<'_>) -> Vec<(&'static str, PathBuf)> {
        self.detectors
            .iter()
            .filter_map(|d| d.evaluate(listing).map(|path| (d.id(), path)))
            .collect()
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DetectorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorRegistry")
            .field("detectors", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::DirCache;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct VendorDetector;

    impl ArtifactDetector for VendorDetector {
        fn id(&self) -> &'static str {
            "go-vendor"
        }

        fn display_name(&self) -> &'static str {
            "Go vendor"
        }

        fn markers(&self) -> &'static [&'static str] {
            &["go.mod"]
        }

        fn artifact_dirs(&self) -> &'static [&'static str] {
            &["vendor"]
        }
    }

    fn evaluate_with(registry: &DetectorRegistry, dir: &Path) -> Vec<(&'static str, PathBuf)> {
        let cache = DirCache::new();
        let entries = cache.read(dir).unwrap();
        let listing = DirListing::new(dir, &entries, &cache);
        registry.evaluate(&listing)
    }

    #[test]
    fn test_registry_new_has_all_detectors() {
        let registry = DetectorRegistry::new();
        let ids = registry.ids();

        assert!(ids.contains(&"cargo"));
        assert!(ids.contains(&"node"));
        assert!(ids.contains(&"cmake"));
        assert!(ids.contains(&"gradle"));
        assert!(ids.contains(&"unity"));
        assert!(ids.contains(&"rebar"));
        assert_eq!(ids.len(), 30);
    }

    #[test]
    fn test_registry_with_types() {
        let registry = DetectorRegistry::with_types(&["cargo", "node"]);
        let ids = registry.ids();

        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"cargo"));
        assert!(ids.contains(&"node"));
        assert!(!ids.contains(&"gradle"));
    }

    #[test]
    fn test_registry_with_empty_types() {
        let registry = DetectorRegistry::with_types(&[]);

        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_without_types() {
        let registry = DetectorRegistry::without_types(&["cargo"]);
        let ids = registry.ids();

        assert!(!ids.contains(&"cargo"));
        assert!(ids.contains(&"node"));
        assert_eq!(ids.len(), 29);
    }

    #[test]
    fn test_registry_get() {
        let registry = DetectorRegistry::new();

        let cargo = registry.get("cargo");
        assert!(cargo.is_some());
        assert_eq!(cargo.unwrap().id(), "cargo");

        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_registry_register_custom_detector() {
        let mut registry = DetectorRegistry::empty();
        registry.register(Arc::new(VendorDetector));
        registry.register(Arc::new(VendorDetector));

        assert_eq!(registry.ids(), vec!["go-vendor"]);
    }

    #[test]
    fn test_registry_clone_shares_detectors() {
        let mut registry = DetectorRegistry::with_types(&["cargo"]);
        registry.register(Arc::new(VendorDetector));
        let cloned = registry.clone();

        assert_eq!(cloned.len(), 2);
        assert!(cloned.get("go-vendor").is_some());
    }

    #[test]
    fn test_evaluate_reports_every_match() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.json"), "{}").unwrap();
        for dir in ["node_modules", ".next"] {
            fs::create_dir(tmp.path().join(dir)).unwrap();
            fs::write(tmp.path().join(dir).join("chunk.js"), "x").unwrap();
        }

        let mut matches = evaluate_with(&DetectorRegistry::new(), tmp.path());
        matches.sort();

        assert_eq!(
            matches,
            vec![
                ("next", tmp.path().join(".next")),
                ("node", tmp.path().join("node_modules")),
            ]
        );
    }

    #[test]
    fn test_evaluate_custom_detector_needs_no_walker_change() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("go.mod"), "module x").unwrap();
        fs::create_dir(tmp.path().join("vendor")).unwrap();
        fs::write(tmp.path().join("vendor/modules.txt"), "x").unwrap();

        let mut registry = DetectorRegistry::empty();
        registry.register(Arc::new(VendorDetector));

        assert_eq!(
            evaluate_with(&registry, tmp.path()),
            vec![("go-vendor", tmp.path().join("vendor"))]
        );
    }

    #[test]
    fn test_registry_default() {
        assert_eq!(DetectorRegistry::default().len(), 30);
    }
}
