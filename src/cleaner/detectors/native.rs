//! Native toolchain detectors: CMake, Meson, Ninja, Bazel, Qobs, D/dub,
//! Jai and SwiftPM.

use crate::cleaner::{ArtifactDetector, DirListing};
use std::path::PathBuf;

/// Detector for CMake build trees.
///
/// Unlike the others this reports the directory it runs on: a directory
/// holding both `CMakeCache.txt` and a non-empty `CMakeFiles/` is itself
/// the build output.
pub struct CMakeDetector;

impl ArtifactDetector for CMakeDetector {
    fn id(&self) -> &'static str {
        "cmake"
    }

    fn display_name(&self) -> &'static str {
        "CMake"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["CMakeCache.txt", "CMakeFiles"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["CMakeFiles"]
    }

    /// Both markers are required.
    fn is_project(&self, listing: &DirListing<'_>) -> bool {
        self.markers().iter().all(|m| listing.has(m))
    }

    fn evaluate(&self, listing: &DirListing<'_>) -> Option<PathBuf> {
        if self.is_project(listing) && listing.is_non_empty_dir("CMakeFiles") {
            Some(listing.path().to_path_buf())
        } else {
            None
        }
    }
}

/// Detector for Meson projects.
pub struct MesonDetector;

impl ArtifactDetector for MesonDetector {
    fn id(&self) -> &'static str {
        "meson"
    }

    fn display_name(&self) -> &'static str {
        "Meson"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["meson.build"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["build", "_build"]
    }
}

/// Detector for hand-written Ninja builds.
pub struct NinjaDetector;

impl ArtifactDetector for NinjaDetector {
    fn id(&self) -> &'static str {
        "ninja"
    }

    fn display_name(&self) -> &'static str {
        "Ninja"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["build.ninja"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["build"]
    }
}

/// Detector for Bazel workspaces.
///
/// Bazel output lives in `bazel-<name>` convenience links, so the candidates
/// come from the listing itself: the first non-empty `bazel-*` entry wins.
pub struct BazelDetector;

impl ArtifactDetector for BazelDetector {
    fn id(&self) -> &'static str {
        "bazel"
    }

    fn display_name(&self) -> &'static str {
        "Bazel"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["WORKSPACE", "BUILD"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &[] // Discovered from the listing
    }

    fn evaluate(&self, listing: &DirListing<'_>) -> Option<PathBuf> {
        if !self.is_project(listing) {
            return None;
        }
        listing
            .entries()
            .iter()
            .find(|e| {
                e.name.to_string_lossy().starts_with("bazel-") && listing.is_non_empty_dir(&e.name)
            })
            .map(|e| listing.path().join(&e.name))
    }
}

/// Detector for Qobs projects.
pub struct QobsDetector;

impl ArtifactDetector for QobsDetector {
    fn id(&self) -> &'static str {
        "qobs"
    }

    fn display_name(&self) -> &'static str {
        "Qobs"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["Qobs.toml"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["build"]
    }
}

/// Detector for D packages built with dub.
pub struct DubDetector;

impl ArtifactDetector for DubDetector {
    fn id(&self) -> &'static str {
        "d"
    }

    fn display_name(&self) -> &'static str {
        "D/dub"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["dub.json", "dub.sdl"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &[".dub"]
    }
}

/// Detector for Jai programs: any `*.jai` source file next to `bin/` or `.build/`.
pub struct JaiDetector;

impl ArtifactDetector for JaiDetector {
    fn id(&self) -> &'static str {
        "jai"
    }

    fn display_name(&self) -> &'static str {
        "Jai"
    }

    fn markers(&self) -> &'static [&'static str] {
        &[] // Uses custom detection
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["bin", ".build"]
    }

    fn is_project(&self, listing: &DirListing<'_>) -> bool {
        listing.has_file_with_suffix(".jai")
    }
}

/// Detector for Swift Package Manager packages.
pub struct SwiftPmDetector;

impl ArtifactDetector for SwiftPmDetector {
    fn id(&self) -> &'static str {
        "swiftpm"
    }

    fn display_name(&self) -> &'static str {
        "SwiftPM"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["Package.swift"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &[".build"]
    }
}
