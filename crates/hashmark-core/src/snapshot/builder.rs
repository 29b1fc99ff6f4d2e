//! Snapshot builder: Recursive tree assembly

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use super::metadata::filesystem_mtime;
use super::{Snapshot, SnapshotError, TreeEntry};
use crate::history::{CommitTimeSource, NoHistory};
use crate::tagging::strip_tag;

/// Entries of one folder plus the aggregates its parent needs
#[derive(Debug, Default)]
struct FolderListing {
    entries: Vec<TreeEntry>,
    total_size: u64,
    /// `None` when no file lives anywhere beneath the folder
    latest_file_time: Option<DateTime<Utc>>,
}

/// Builds snapshots of a folder
#[derive(Debug)]
pub struct SnapshotBuilder<H> {
    root: PathBuf,
    history: H,
}

impl SnapshotBuilder<NoHistory> {
    /// Builder that only uses filesystem times
    #[must_use]
    pub fn without_history(root: impl Into<PathBuf>) -> Self {
        Self::new(root, NoHistory)
    }
}

impl<H: CommitTimeSource> SnapshotBuilder<H> {
    /// Create a builder for `root` resolving commit times through `history`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, history: H) -> Self {
        Self {
            root: root.into(),
            history,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Build the full snapshot document
    ///
    /// # Errors
    /// Returns an error if the root is not a readable directory.
    pub fn build(&self, generated_at: DateTime<Utc>) -> Result<Snapshot, SnapshotError> {
        Ok(Snapshot {
            target_folder: self.root.display().to_string(),
            generated_at,
            files: self.entries()?,
        })
    }

    /// Entries directly under the root, each folder carrying its subtree
    ///
    /// # Errors
    /// Returns an error if the root is not a readable directory.
    pub fn entries(&self) -> Result<Vec<TreeEntry>, SnapshotError> {
        if !self.root.is_dir() {
            return Err(SnapshotError::NotADirectory(self.root.clone()));
        }
        Ok(self.scan_folder(&self.root, Path::new(""))?.entries)
    }

    fn scan_folder(&self, folder: &Path, relative: &Path) -> Result<FolderListing, SnapshotError> {
        let mut children: Vec<fs::DirEntry> = fs::read_dir(folder)
            .map_err(|source| SnapshotError::Io {
                path: folder.to_path_buf(),
                source,
            })?
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry in {}: {}", folder.display(), e);
                    None
                }
            })
            .collect();
        children.sort_by_key(fs::DirEntry::file_name);

        let mut listing = FolderListing::default();
        for child in children {
            if let Some(entry) = self.scan_child(&child, relative, &mut listing) {
                listing.entries.push(entry);
            }
        }
        Ok(listing)
    }

    /// Describe one directory entry, folding its size and time into `listing`
    fn scan_child(
        &self,
        child: &fs::DirEntry,
        relative: &Path,
        listing: &mut FolderListing,
    ) -> Option<TreeEntry> {
        let path = child.path();
        let file_name = child.file_name();
        let child_relative = relative.join(&file_name);
        let name = file_name.to_string_lossy().into_owned();
        let relative_path = child_relative.to_string_lossy().into_owned();

        let file_type = match child.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                debug!("Skipping {}: {}", path.display(), e);
                return None;
            }
        };

        if file_type.is_symlink() {
            debug!("Skipping symlink {}", path.display());
            None
        } else if file_type.is_file() {
            let meta = match child.metadata() {
                Ok(meta) => meta,
                Err(e) => {
                    debug!("Skipping {}: {}", path.display(), e);
                    return None;
                }
            };
            let size_bytes = meta.len();
            let last_modified_at = self
                .history
                .last_commit_time(&path)
                .or_else(|| meta.modified().ok().map(DateTime::<Utc>::from))
                .unwrap_or_default();

            listing.total_size += size_bytes;
            listing.latest_file_time = listing.latest_file_time.max(Some(last_modified_at));

            Some(TreeEntry::File {
                name: strip_tag(&name).into_owned(),
                relative_path,
                size_bytes,
                last_modified_at,
            })
        } else if file_type.is_dir() {
            let sub = match self.scan_folder(&path, &child_relative) {
                Ok(sub) => sub,
                Err(e) => {
                    debug!("Skipping folder: {}", e);
                    return None;
                }
            };
            let last_modified_at = sub
                .latest_file_time
                .or_else(|| filesystem_mtime(&path))
                .unwrap_or_default();

            listing.total_size += sub.total_size;
            listing.latest_file_time = listing.latest_file_time.max(sub.latest_file_time);

            Some(TreeEntry::Folder {
                name,
                relative_path,
                total_size_bytes: sub.total_size,
                last_modified_at,
                children: sub.entries,
            })
        } else {
            debug!("Skipping special file {}", path.display());
            None
        }
    }
}
