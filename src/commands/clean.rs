//! Clean command implementation.

use crate::cleaner::{CleanExecutor, CleanOptions, CleanResult, FoundArtifact};
use crate::cli::CleanArgs;
use crate::commands::prompt::Prompter;
use crate::commands::{build_walker, discover};
use crate::config::Config;
use anyhow::Result;
use humansize::{format_size, BINARY};
use std::io::{BufRead, Write};

/// Run the clean command.
pub fn run(args: CleanArgs, config: &Config) -> Result<()> {
    let mut prompter = Prompter::stdio();
    let failed = run_with(&args, config, &mut prompter)?;

    if failed > 0 {
        std::process::exit(5); // Partial failure
    }

    Ok(())
}

/// Walk, report, then remove each confirmed artifact. Returns the number of
/// failed removals.
fn run_with<R: BufRead, W: Write>(
    args: &CleanArgs,
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<usize> {
    let (walker, root) = build_walker(config, &args.walk)?;

    if !args.force
        && !prompter.confirm(&format!(
            "This will recursively search build folders in {}. You will be prompted to delete each one. Are you sure (y/n)?",
            root.display()
        ))?
    {
        return Ok(0);
    }

    let (found, checked) = discover(&walker, &root, true)?;

    println!(
        "\nProcessed {} directories, found {} candidates.",
        checked,
        found.len()
    );
    if found.is_empty() {
        println!("Good for you.");
        return Ok(0);
    }

    let executor = CleanExecutor::new(CleanOptions {
        dry_run: args.dry_run,
        measure: config.clean.show_sizes,
    });

    let total = found.len();
    let mut results = Vec::with_capacity(total);
    for (i, artifact) in found.iter().enumerate() {
        if !args.force && !prompter.confirm(&removal_question(i + 1, total, artifact))? {
            results.push(CleanResult::Skipped {
                artifact: artifact.clone(),
                reason: "declined".to_string(),
            });
            continue;
        }

        let result = executor.remove(artifact);
        report(&result, args.dry_run, config.clean.show_sizes);
        results.push(result);
    }

    let summary = CleanExecutor::summarize(&results);
    tracing::info!(
        removed = summary.removed_count,
        failed = summary.failed_count,
        skipped = summary.skipped_count,
        freed = summary.total_freed,
        "Clean finished"
    );

    if summary.removed_count == 0 {
        println!("Do you really think they're this important?");
    } else if args.dry_run {
        println!(
            "[DRY RUN] Would eliminate {} disk space abusers.",
            summary.removed_count
        );
    } else {
        println!(
            "Eliminated {} disk space abusers.",
            summary.removed_count
        );
    }

    if config.clean.show_sizes && summary.removed_count > 0 {
        println!("Freed: {}", format_size(summary.total_freed, BINARY));
    }

    Ok(summary.failed_count)
}

fn removal_question(index: usize, total: usize, artifact: &FoundArtifact) -> String {
    format!(
        "({}/{}) remove {} directory at {} (y/n)?",
        index,
        total,
        artifact.artifact_type,
        artifact.path.display()
    )
}

fn report(result: &CleanResult, dry_run: bool, show_sizes: bool) {
    match result {
        CleanResult::Removed {
            artifact,
            freed_bytes,
        } => {
            let verb = if dry_run { "Would remove" } else { "Removed" };
            if show_sizes {
                println!(
                    "{} {} ({})",
                    verb,
                    artifact.path.display(),
                    format_size(*freed_bytes, BINARY)
                );
            } else {
                println!("{} {}", verb, artifact.path.display());
            }
        }
        CleanResult::Failed { artifact, error } => {
            println!("Error removing {}: {}", artifact.path.display(), error);
        }
        CleanResult::Skipped { artifact, reason } => {
            println!("Skipped {}: {}", artifact.path.display(), reason);
        }
    }
}
