use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Artifact Sweeper - find and remove build artifact directories
#[derive(Parser, Debug)]
#[command(name = "artifact-sweeper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find build artifacts and remove them after confirmation
    Clean(CleanArgs),

    /// Find build artifacts and list them
    Scan(ScanArgs),

    /// List the supported artifact detectors
    Detectors,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Options shared by every command that walks a directory tree.
#[derive(Args, Debug, Clone)]
pub struct WalkArgs {
    /// Root directory to search
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Maximum recursion depth
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Concurrent directory visits (0 = synchronous)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Artifact types to look for (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_name = "TYPES")]
    pub types: Option<Vec<String>>,

    /// Extra directory names to skip (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_name = "NAMES")]
    pub skip: Option<Vec<String>>,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    #[command(flatten)]
    pub walk: WalkArgs,

    /// Show what would be removed without removing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub walk: WalkArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Validates the CLI definition is correct
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_scan_command() {
        let cli = Cli::parse_from(["artifact-sweeper", "scan", "/home"]);
        match cli.command {
            Command::Scan(args) => {
                assert_eq!(args.walk.path, PathBuf::from("/home"));
                assert!(args.walk.max_depth.is_none());
                assert!(!args.json);
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn parse_clean_defaults_to_current_dir() {
        let cli = Cli::parse_from(["artifact-sweeper", "clean"]);
        match cli.command {
            Command::Clean(args) => {
                assert_eq!(args.walk.path, PathBuf::from("."));
                assert!(!args.dry_run);
                assert!(!args.force);
            }
            _ => panic!("Expected Clean command"),
        }
    }

    #[test]
    fn parse_clean_with_options() {
        let cli = Cli::parse_from([
            "artifact-sweeper",
            "clean",
            "--dry-run",
            "--types",
            "cargo,node",
            "--skip",
            "vendor",
            "--max-depth",
            "5",
            "--jobs",
            "0",
            "/projects",
        ]);
        match cli.command {
            Command::Clean(args) => {
                assert!(args.dry_run);
                assert_eq!(args.walk.max_depth, Some(5));
                assert_eq!(args.walk.jobs, Some(0));
                assert_eq!(
                    args.walk.types,
                    Some(vec!["cargo".to_string(), "node".to_string()])
                );
                assert_eq!(args.walk.skip, Some(vec!["vendor".to_string()]));
            }
            _ => panic!("Expected Clean command"),
        }
    }

    #[test]
    fn global_verbose_flag() {
        let cli = Cli::parse_from(["artifact-sweeper", "-vvv", "detectors"]);
        assert_eq!(cli.verbose, 3);
    }
}
