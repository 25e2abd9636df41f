//! Artifact detection and removal.
//!
//! This module provides:
//! - Detection of build artifacts for many ecosystems (Cargo, npm, Gradle, etc.)
//! - The registry the walker runs at every directory
//! - Sequential removal of confirmed artifacts

mod detector;
pub mod detectors;
mod executor;
mod registry;

pub use detector::{ArtifactDetector, DirListing, FoundArtifact};
pub use detectors::all_detectors;
pub use executor::{CleanExecutor, CleanOptions, CleanResult, CleanSummary};
pub use registry::DetectorRegistry;
