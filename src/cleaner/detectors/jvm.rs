//! JVM build tool detectors: Maven, Gradle, sbt and Android.

use crate::cleaner::ArtifactDetector;

/// Detector for Maven projects.
///
/// Identifies projects by `pom.xml` and reports `target/`.
pub struct MavenDetector;

impl ArtifactDetector for MavenDetector {
    fn id(&self) -> &'static str {
        "maven"
    }

    fn display_name(&self) -> &'static str {
        "Maven"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["pom.xml"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["target"]
    }
}

/// Detector for Gradle projects.
///
/// Identifies projects by `build.gradle` or `build.gradle.kts` and reports
/// `build/`.
pub struct GradleDetector;

impl ArtifactDetector for GradleDetector {
    fn id(&self) -> &'static str {
        "gradle"
    }

    fn display_name(&self) -> &'static str {
        "Gradle"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["build.gradle", "build.gradle.kts"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["build"]
    }
}

/// Detector for Scala sbt projects.
pub struct SbtDetector;

impl ArtifactDetector for SbtDetector {
    fn id(&self) -> &'static str {
        "sbt"
    }

    fn display_name(&self) -> &'static str {
        "Scala/sbt"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["build.sbt"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["target"]
    }
}

/// Detector for Android modules laid out around `AndroidManifest.xml`.
pub struct AndroidDetector;

impl ArtifactDetector for AndroidDetector {
    fn id(&self) -> &'static str {
        "android"
    }

    fn display_name(&self) -> &'static str {
        "Android"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["AndroidManifest.xml"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["build"]
    }
}
