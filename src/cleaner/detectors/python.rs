//! Python project detector.

use crate::cleaner::ArtifactDetector;

/// Detector for Python packages.
///
/// Identifies projects by `setup.py` or `pyproject.toml` and reports the
/// `build/` directory, or `dist/` when there is no build output.
pub struct PythonDetector;

impl ArtifactDetector for PythonDetector {
    fn id(&self) -> &'static str {
        "python"
    }

    fn display_name(&self) -> &'static str {
        "Python"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["setup.py", "pyproject.toml"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["build", "dist"]
    }
}
