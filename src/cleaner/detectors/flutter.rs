//! Flutter/Dart project detector.

use crate::cleaner::ArtifactDetector;

/// Detector for Flutter and Dart packages.
///
/// Identifies projects by `pubspec.yaml` and reports `build/`, or the
/// `.dart_tool/` cache when nothing was built yet.
pub struct FlutterDetector;

impl ArtifactDetector for FlutterDetector {
    fn id(&self) -> &'static str {
        "flutter"
    }

    fn display_name(&self) -> &'static str {
        "Flutter/Dart"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["pubspec.yaml"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["build", ".dart_tool"]
    }
}
