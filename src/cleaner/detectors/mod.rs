//! Built-in artifact detectors.

mod beam;
mod cargo;
mod dotnet;
mod flutter;
mod gamedev;
mod haskell;
mod jvm;
mod native;
mod node;
mod python;
mod scripting;

pub use beam::{MixDetector, RebarDetector};
pub use cargo::CargoDetector;
pub use dotnet::DotnetDetector;
pub use flutter::FlutterDetector;
pub use gamedev::{UnityDetector, UnrealDetector};
pub use haskell::{CabalDetector, StackDetector};
pub use jvm::{AndroidDetector, GradleDetector, MavenDetector, SbtDetector};
pub use native::{
    BazelDetector, CMakeDetector, DubDetector, JaiDetector, MesonDetector, NinjaDetector,
    QobsDetector, SwiftPmDetector,
};
pub use node::{AngularDetector, BunDetector, ExpoDetector, NextDetector, NodeDetector, PnpmDetector};
pub use python::PythonDetector;
pub use scripting::{BundlerDetector, ComposerDetector};

use crate::cleaner::ArtifactDetector;
use std::sync::Arc;

/// Returns all built-in detectors.
pub fn all_detectors() -> Vec<Arc<dyn ArtifactDetector>> {
    vec![
        Arc::new(CargoDetector),
        Arc::new(NodeDetector),
        Arc::new(CMakeDetector),
        Arc::new(MavenDetector),
        Arc::new(GradleDetector),
        Arc::new(DotnetDetector),
        Arc::new(PythonDetector),
        Arc::new(DubDetector),
        Arc::new(JaiDetector),
        Arc::new(SwiftPmDetector),
        Arc::new(QobsDetector),
        Arc::new(BazelDetector),
        Arc::new(MesonDetector),
        Arc::new(NinjaDetector),
        Arc::new(SbtDetector),
        Arc::new(CabalDetector),
        Arc::new(StackDetector),
        Arc::new(ComposerDetector),
        Arc::new(BundlerDetector),
        Arc::new(PnpmDetector),
        Arc::new(BunDetector),
        Arc::new(ExpoDetector),
        Arc::new(NextDetector),
        Arc::new(AngularDetector),
        Arc::new(UnrealDetector),
        Arc::new(UnityDetector),
        Arc::new(AndroidDetector),
        Arc::new(FlutterDetector),
        Arc::new(MixDetector),
        Arc::new(RebarDetector),
    ]
}
