//! Game engine detectors: Unreal and Unity.

use crate::cleaner::{ArtifactDetector, DirListing};

/// Detector for Unreal Engine projects (any `*.uproject` entry).
pub struct UnrealDetector;

impl ArtifactDetector for UnrealDetector {
    fn id(&self) -> &'static str {
        "unreal"
    }

    fn display_name(&self) -> &'static str {
        "Unreal Engine"
    }

    fn markers(&self) -> &'static [&'static str] {
        &[] // Uses custom detection
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["Intermediate", "Saved", "Binaries"]
    }

    fn is_project(&self, listing: &DirListing<'_>) -> bool {
        listing.has_name_with_suffix(".uproject")
    }
}

/// Detector for Unity projects, recognised by their `ProjectSettings` directory.
pub struct UnityDetector;

impl ArtifactDetector for UnityDetector {
    fn id(&self) -> &'static str {
        "unity"
    }

    fn display_name(&self) -> &'static str {
        "Unity"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["ProjectSettings"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["Library", "Temp", "Logs", "obj"]
    }
}
