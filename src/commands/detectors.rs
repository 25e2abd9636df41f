//! Detectors command: list what can be found.

use crate::config::Config;
use anyhow::Result;

/// Print every detector, marking those disabled by the configuration.
pub fn run(config: &Config) -> Result<()> {
    let enabled = config.registry();
    let all = crate::cleaner::DetectorRegistry::new();

    println!("  {:<10} {:<16} {}", "ID", "NAME", "ARTIFACTS");
    println!("  {}", "─".repeat(72));

    for detector in all.detectors() {
        let status = if enabled.get(detector.id()).is_some() {
            ""
        } else {
            "(disabled)"
        };
        let dirs = match detector.artifact_dirs() {
            [] => "(from listing)".to_string(),
            dirs => dirs.join(", "),
        };
        println!(
            "  {:<10} {:<16} {:<40} {}",
            detector.id(),
            detector.display_name(),
            dirs,
            status
        );
    }

    Ok(())
}
