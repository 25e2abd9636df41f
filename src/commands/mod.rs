//! Subcommand implementations.

pub mod clean;
pub mod detectors;
pub mod prompt;
pub mod scan;

use crate::cleaner::{DetectorRegistry, FoundArtifact};
use crate::cli::WalkArgs;
use crate::config::Config;
use crate::error::SweeperError;
use crate::scanner::{ProgressCounter, Walker};
use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Spinner refresh interval while a walk is running.
const PROGRESS_TICK: Duration = Duration::from_millis(50);

/// Build the walker for a command from config values overridden by flags.
///
/// Returns the walker and the resolved root directory.
pub(crate) fn build_walker(config: &Config, args: &WalkArgs) -> Result<(Walker, PathBuf)> {
    let root = args.path.canonicalize().map_err(|source| SweeperError::Io {
        path: args.path.clone(),
        source,
    })?;

    if !root.is_dir() {
        let reason = format!("{} is not a directory", root.display());
        return Err(SweeperError::InvalidPath(reason).into());
    }

    let mut options = config.walk_options();
    if let Some(depth) = args.max_depth {
        options = options.with_max_depth(depth);
    }
    if let Some(jobs) = args.jobs {
        options = options.with_concurrency(jobs);
    }
    if let Some(skip) = &args.skip {
        options = options.with_extra_skip_dirs(skip.iter().cloned());
    }

    let registry = match &args.types {
        Some(types) => {
            let known = DetectorRegistry::new();
            let requested: Vec<&str> = types.iter().map(|s| s.as_str()).collect();
            let unknown: Vec<&str> = requested
                .iter()
                .copied()
                .filter(|id| known.get(id).is_none())
                .collect();
            if !unknown.is_empty() {
                bail!(
                    "Unknown artifact type(s): {}. Valid types: {}",
                    unknown.join(", "),
                    known.ids().join(", ")
                );
            }

            let allowed = config.registry();
            let filtered: Vec<&str> = requested
                .into_iter()
                .filter(|id| allowed.get(id).is_some())
                .collect();
            DetectorRegistry::with_types(&filtered)
        }
        None => config.registry(),
    };

    if registry.is_empty() {
        bail!("No artifact detectors enabled");
    }

    tracing::debug!(
        root = %root.display(),
        max_depth = options.max_depth,
        concurrency = options.concurrency,
        detectors = registry.len(),
        "Prepared walker"
    );

    Ok((Walker::new(options, registry), root))
}

/// Walk `root`, announcing each artifact as it arrives.
///
/// A spinner shows the number of directories checked so far. Returns the
/// artifacts in discovery order and the final directory count.
pub(crate) fn discover(
    walker: &Walker,
    root: &std::path::Path,
    announce: bool,
) -> Result<(Vec<FoundArtifact>, u64)> {
    let traversal = walker.start(root)?;
    let progress = traversal.progress();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(PROGRESS_TICK);

    let mut found = Vec::new();
    loop {
        spinner.set_message(checked_message(&progress));
        match traversal.results().recv_timeout(PROGRESS_TICK) {
            Ok(artifact) => {
                if announce {
                    spinner.suspend(|| {
                        println!(
                            "Found {} (type: {})",
                            artifact.path.display(),
                            artifact.artifact_type
                        )
                    });
                }
                found.push(artifact);
            }
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => continue,
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
        }
    }

    traversal.join()?;
    spinner.finish_with_message(checked_message(&progress));

    Ok((found, progress.get()))
}

fn checked_message(progress: &ProgressCounter) -> String {
    format!("Checked {} directories...", progress.get())
}
