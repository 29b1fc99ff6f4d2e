//! Snapshot command: Write a JSON snapshot of a folder tree

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use hashmark_core::history::GitHistory;
use hashmark_core::snapshot::{Snapshot, SnapshotBuilder, relative_output_path};
use tracing::{debug, info};

/// Run the snapshot command, returning the absolute output path
///
/// # Errors
/// Returns an error if the target is not a directory, cannot be read, or
/// the output cannot be written.
pub fn run(target: &Path, output: &Path) -> Result<PathBuf> {
    if !target.is_dir() {
        bail!("Target path '{}' is not a valid folder", target.display());
    }

    let history = GitHistory::discover(target);
    log_history(history.as_ref());

    let abs_target = target.canonicalize().unwrap_or_else(|_| target.to_path_buf());
    info!("Walking folder: {}", abs_target.display());

    let snapshot = create_snapshot(target, output, history)?;

    snapshot
        .write_to(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let abs_output = output.canonicalize().unwrap_or_else(|_| output.to_path_buf());
    info!("✓ Snapshot written: {}", abs_output.display());
    Ok(abs_output)
}

/// Build the snapshot and stamp the output file's own entry with the
/// generation time, since it is rewritten right after the walk
fn create_snapshot(target: &Path, output: &Path, history: Option<GitHistory>) -> Result<Snapshot> {
    let generated_at = Utc::now();
    let mut snapshot = SnapshotBuilder::new(target, history)
        .build(generated_at)
        .with_context(|| format!("Failed to snapshot {}", target.display()))?;

    let stamped = relative_output_path(target, output)
        .is_some_and(|relative| snapshot.touch(&relative, generated_at));
    if stamped {
        debug!("Stamped own output entry {}", output.display());
    }
    Ok(snapshot)
}

fn log_history(history: Option<&GitHistory>) {
    match history {
        Some(history) => info!(
            "Git repository detected at {} (commit times in UTC)",
            history.root().display()
        ),
        None => info!("No git repository detected (filesystem times in UTC)"),
    }
}
