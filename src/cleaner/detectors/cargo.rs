//! Cargo/Rust project detector.

use crate::cleaner::ArtifactDetector;

/// Detector for Rust/Cargo projects.
///
/// Identifies projects by the presence of `Cargo.toml` and reports
/// the `target/` directory.
pub struct CargoDetector;

impl ArtifactDetector for CargoDetector {
    fn id(&self) -> &'static str {
        "cargo"
    }

    fn display_name(&self) -> &'static str {
        "Rust/Cargo"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["Cargo.toml"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["target"]
    }
}
