//! Vendored dependency detectors for PHP (Composer) and Ruby (Bundler).

use crate::cleaner::ArtifactDetector;

/// Detector for Composer's `vendor/` directory.
pub struct ComposerDetector;

impl ArtifactDetector for ComposerDetector {
    fn id(&self) -> &'static str {
        "composer"
    }

    fn display_name(&self) -> &'static str {
        "PHP/Composer"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["composer.json"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["vendor"]
    }
}

/// Detector for gems installed with `bundle install --path vendor/bundle`.
pub struct BundlerDetector;

impl ArtifactDetector for BundlerDetector {
    fn id(&self) -> &'static str {
        "bundler"
    }

    fn display_name(&self) -> &'static str {
        "Ruby/Bundler"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["Gemfile"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["vendor/bundle"]
    }
}
