use crate::cleaner::DetectorRegistry;
use crate::error::{ConfigError, Result};
use crate::scanner::{WalkOptions, DEFAULT_CONCURRENCY, DEFAULT_MAX_DEPTH, DEFAULT_SKIP_DIRS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the directory holding our config file under the user config dir.
const APP_DIR: &str = "artifact-sweeper";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub walker: WalkerConfig,
    pub detectors: DetectorsConfig,
    pub clean: CleanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Maximum recursion depth
    pub max_depth: usize,
    /// Concurrent directory visits (0 = synchronous)
    pub concurrency: usize,
    /// Directory names never descended into
    pub skip_dirs: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorsConfig {
    /// Detector ids to run (empty = all)
    pub enabled: Vec<String>,
    /// Detector ids never run
    pub disabled: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Compute and show artifact sizes
    pub show_sizes: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            concurrency: DEFAULT_CONCURRENCY,
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self { show_sizes: true }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// used when present, and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Per-user config file location, e.g. `~/.config/artifact-sweeper/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Read configuration file");
        Ok(config)
    }

    /// Reject values the walker cannot use.
    pub fn validate(&self) -> Result<()> {
        for name in &self.walker.skip_dirs {
            if name.is_empty() || name.contains('/') || name.contains('\\') {
                return Err(ConfigError::Invalid(format!(
                    "skip_dirs entries must be plain directory names, got '{}'",
                    name
                ))
                .into());
            }
        }

        let known = DetectorRegistry::new().ids();
        for id in self.detectors.enabled.iter().chain(&self.detectors.disabled) {
            if !known.contains(&id.as_str()) {
                return Err(ConfigError::Invalid(format!("unknown detector '{}'", id)).into());
            }
        }

        Ok(())
    }

    /// Walker options described by this configuration.
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions::new()
            .with_max_depth(self.walker.max_depth)
            .with_concurrency(self.walker.concurrency)
            .with_skip_dirs(self.walker.skip_dirs.iter().cloned())
    }

    /// Detector registry described by this configuration.
    pub fn registry(&self) -> DetectorRegistry {
        let disabled: Vec<&str> = self.detectors.disabled.iter().map(|s| s.as_str()).collect();

        if self.detectors.enabled.is_empty() {
            DetectorRegistry::without_types(&disabled)
        } else {
            let enabled: Vec<&str> = self
                .detectors
                .enabled
                .iter()
                .map(|s| s.as_str())
                .filter(|id| !disabled.contains(id))
                .collect();
            DetectorRegistry::with_types(&enabled)
        }
    }
}
