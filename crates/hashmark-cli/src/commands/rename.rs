//! Rename command: Tag files with their content hash

use anyhow::{Context, Result};
use hashmark_core::renamer::{RenameReport, Renamer, RenamerConfig};
use tracing::{info, warn};

/// Run the rename command
///
/// # Errors
/// Returns an error if the target folder is missing or the configuration is
/// invalid. Individual file failures are only reported.
pub fn run(config: RenamerConfig) -> Result<RenameReport> {
    info!(
        "Tagging files in {} (hash width {})",
        config.target_folder.display(),
        config.hash_width
    );

    let target = config.target_folder.clone();
    let report = Renamer::new(config)
        .run()
        .with_context(|| format!("Failed to rename files in {}", target.display()))?;

    if !report.is_clean() {
        warn!("{} files could not be renamed", report.failures.len());
    }
    Ok(report)
}
