//! JavaScript ecosystem detectors: npm, pnpm, Bun, Expo, Next.js and Angular.
//!
//! Several of these share `package.json`; each one reports its own
//! artifact directory, so a Next.js app yields both `node_modules/` and `.next/`.

use crate::cleaner::ArtifactDetector;

/// Detector for npm/yarn packages (`package.json` -> `node_modules/`).
pub struct NodeDetector;

impl ArtifactDetector for NodeDetector {
    fn id(&self) -> &'static str {
        "node"
    }

    fn display_name(&self) -> &'static str {
        "Node.js"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["package.json"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["node_modules"]
    }
}

/// Detector for pnpm workspaces.
pub struct PnpmDetector;

impl ArtifactDetector for PnpmDetector {
    fn id(&self) -> &'static str {
        "pnpm"
    }

    fn display_name(&self) -> &'static str {
        "pnpm"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["pnpm-lock.yaml"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["node_modules", ".pnpm-store"]
    }
}

/// Detector for Bun projects.
pub struct BunDetector;

impl ArtifactDetector for BunDetector {
    fn id(&self) -> &'static str {
        "bun"
    }

    fn display_name(&self) -> &'static str {
        "Bun"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["bun.lockb"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["node_modules", ".bun"]
    }
}

/// Detector for Expo (React Native) apps.
pub struct ExpoDetector;

impl ArtifactDetector for ExpoDetector {
    fn id(&self) -> &'static str {
        "expo"
    }

    fn display_name(&self) -> &'static str {
        "Expo"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["app.json", "app.config.js"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &[".expo", ".expo-shared"]
    }
}

/// Detector for Next.js build output.
pub struct NextDetector;

impl ArtifactDetector for NextDetector {
    fn id(&self) -> &'static str {
        "next"
    }

    fn display_name(&self) -> &'static str {
        "Next.js"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["package.json"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &[".next"]
    }
}

/// Detector for Angular workspaces.
pub struct AngularDetector;

impl ArtifactDetector for AngularDetector {
    fn id(&self) -> &'static str {
        "angular"
    }

    fn display_name(&self) -> &'static str {
        "Angular"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["angular.json"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["dist"]
    }
}
