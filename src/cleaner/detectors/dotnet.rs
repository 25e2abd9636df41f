//! .NET project detector.

use crate::cleaner::{ArtifactDetector, DirListing};

/// Detector for .NET projects.
///
/// Identifies projects by the presence of `*.csproj` or `*.sln` files
/// and reports `bin/`, falling back to `obj/`.
pub struct DotnetDetector;

impl ArtifactDetector for DotnetDetector {
    fn id(&self) -> &'static str {
        "dotnet"
    }

    fn display_name(&self) -> &'static str {
        ".NET"
    }

    fn markers(&self) -> &'static [&'static str] {
        &[] // Uses custom detection
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["bin", "obj"]
    }

    /// Custom detection for .csproj and .sln files.
    fn is_project(&self, listing: &DirListing<'_>) -> bool {
        listing.has_file_with_suffix(".csproj") || listing.has_file_with_suffix(".sln")
    }
}
