//! Rename pass over a folder

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::RenamerConfig;
use crate::tagging::{ContentDigest, HashedFilename, is_hidden, is_tagged};

/// Errors that can occur while renaming
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Hash width must be at least 1")]
    InvalidWidth,

    #[error("File name is not valid UTF-8: {}", .0.display())]
    InvalidName(PathBuf),

    #[error("Target already exists: {}", .0.display())]
    Collision(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A file that could not be renamed
#[derive(Debug)]
pub struct RenameFailure {
    pub path: PathBuf,
    pub error: RenameError,
}

/// Outcome of a rename run
#[derive(Debug, Default)]
pub struct RenameReport {
    /// `(old, new)` paths of every renamed file
    pub renamed: Vec<(PathBuf, PathBuf)>,
    /// Hidden or already tagged files
    pub skipped: usize,
    pub failures: Vec<RenameFailure>,
}

impl RenameReport {
    /// Whether every candidate file was renamed
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renames files under a folder to embed their content hash
#[derive(Debug)]
pub struct Renamer {
    config: RenamerConfig,
}

impl Renamer {
    #[must_use]
    pub fn new(config: RenamerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RenamerConfig {
        &self.config
    }

    /// Rename every eligible file under the target folder.
    ///
    /// A failure on one file is recorded in the report and the run moves on.
    ///
    /// # Errors
    /// Returns an error if the target folder is not a directory or the
    /// configured hash width is zero.
    pub fn run(&self) -> Result<RenameReport, RenameError> {
        let root = &self.config.target_folder;
        if !root.is_dir() {
            return Err(RenameError::NotADirectory(root.clone()));
        }
        if self.config.hash_width == 0 {
            return Err(RenameError::InvalidWidth);
        }

        let mut report = RenameReport::default();
        for path in collect_files(root) {
            match self.rename_file(&path) {
                Ok(Some(target)) => {
                    info!("✓ {} → {}", display_name(&path), display_name(&target));
                    report.renamed.push((path, target));
                }
                Ok(None) => {
                    report.skipped += 1;
                }
                Err(error) => {
                    warn!("✗ {} failed: {}", path.display(), error);
                    report.failures.push(RenameFailure { path, error });
                }
            }
        }

        info!(
            "Renamed {} files ({} skipped, {} failed)",
            report.renamed.len(),
            report.skipped,
            report.failures.len()
        );
        Ok(report)
    }

    /// Rename a single file. Returns `Ok(None)` for hidden or tagged files.
    ///
    /// # Errors
    /// Returns an error if the name is not UTF-8, the file cannot be read,
    /// the target name is taken, or the rename itself fails.
    pub fn rename_file(&self, path: &Path) -> Result<Option<PathBuf>, RenameError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| RenameError::InvalidName(path.to_path_buf()))?;

        if is_hidden(name) || is_tagged(name) {
            debug!("Skipping {}", path.display());
            return Ok(None);
        }

        let digest = ContentDigest::of_file(path, self.config.chunk_size)?;
        let new_name = HashedFilename::new(name, digest.encode(self.config.hash_width));
        let target = path.with_file_name(new_name.to_string());

        if target.symlink_metadata().is_ok() {
            return Err(RenameError::Collision(target));
        }

        fs::rename(path, &target)?;
        Ok(Some(target))
    }
}

/// Regular files under `root`, leaves first, gathered before any rename
fn collect_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .contents_first(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
