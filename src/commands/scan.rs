//! Scan command implementation.

use crate::cleaner::{CleanExecutor, FoundArtifact};
use crate::cli::ScanArgs;
use crate::commands::{build_walker, discover};
use crate::config::Config;
use anyhow::Result;
use humansize::{format_size, BINARY};
use serde::Serialize;
use std::path::PathBuf;

/// Machine-readable scan output.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub directories_checked: u64,
    pub artifacts: Vec<ScanEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_bytes: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ScanEntry {
    #[serde(flatten)]
    pub artifact: FoundArtifact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

/// Run the scan command.
pub fn run(args: ScanArgs, config: &Config) -> Result<()> {
    let (walker, root) = build_walker(config, &args.walk)?;

    if args.json {
        let (found, checked) = discover(&walker, &root, false)?;
        let report = build_report(root, found, checked, config.clean.show_sizes);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let (found, checked) = discover(&walker, &root, true)?;
    println!(
        "\nProcessed {} directories, found {} candidates.",
        checked,
        found.len()
    );
    if found.is_empty() {
        println!("Good for you.");
        return Ok(());
    }

    if config.clean.show_sizes {
        let total: u64 = found
            .iter()
            .map(|a| CleanExecutor::dir_size(&a.path))
            .sum();
        println!("Total: {}", format_size(total, BINARY));
    }

    Ok(())
}

fn build_report(
    root: PathBuf,
    found: Vec<FoundArtifact>,
    checked: u64,
    measure: bool,
) -> ScanReport {
    let artifacts: Vec<ScanEntry> = found
        .into_iter()
        .map(|artifact| ScanEntry {
            size_bytes: measure.then(|| CleanExecutor::dir_size(&artifact.path)),
            artifact,
        })
        .collect();

    let total_bytes = measure.then(|| artifacts.iter().filter_map(|e| e.size_bytes).sum());

    ScanReport {
        root,
        directories_checked: checked,
        artifacts,
        total_bytes,
    }
}
