//! Haskell detectors: Cabal and Stack.

use crate::cleaner::{ArtifactDetector, DirListing};

/// Detector for Cabal packages (any `*.cabal` entry).
pub struct CabalDetector;

impl ArtifactDetector for CabalDetector {
    fn id(&self) -> &'static str {
        "cabal"
    }

    fn display_name(&self) -> &'static str {
        "Haskell/Cabal"
    }

    fn markers(&self) -> &'static [&'static str] {
        &[] // Uses custom detection
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["dist-newstyle", "dist"]
    }

    fn is_project(&self, listing: &DirListing<'_>) -> bool {
        listing.has_name_with_suffix(".cabal")
    }
}

/// Detector for Stack projects.
pub struct StackDetector;

impl ArtifactDetector for StackDetector {
    fn id(&self) -> &'static str {
        "stack"
    }

    fn display_name(&self) -> &'static str {
        "Haskell/Stack"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["stack.yaml"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &[".stack-work"]
    }
}
