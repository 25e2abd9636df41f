//! Artifact Sweeper - find and remove build artifact directories
//!
//! This crate provides:
//! - A concurrent, depth-bounded directory walker with a per-run listing cache
//! - Detectors for the build artifacts of many toolchains
//! - Interactive, sequential removal of what was found

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod scanner;

// Re-export commonly used types
pub use cleaner::{DetectorRegistry, FoundArtifact};
pub use config::Config;
pub use error::{Result, SweeperError};
pub use scanner::{Traversal, WalkOptions, Walker};
