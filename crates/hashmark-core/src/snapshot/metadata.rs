//! Best-effort file metadata

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use crate::history::CommitTimeSource;

/// Filesystem modification time of `path` in UTC (links are followed)
#[must_use]
pub fn filesystem_mtime(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}

/// Commit time of `path` when history knows it, filesystem time otherwise
#[must_use]
pub fn best_modification_time(
    path: &Path,
    history: &dyn CommitTimeSource,
) -> Option<DateTime<Utc>> {
    history
        .last_commit_time(path)
        .or_else(|| filesystem_mtime(path))
}

/// Total size of every regular, non-symlink file beneath `folder`.
///
/// Entries that cannot be read contribute nothing.
#[must_use]
pub fn folder_total_size(folder: &Path) -> u64 {
    regular_files(folder)
        .filter_map(|entry| entry.metadata().ok())
        .map(|meta| meta.len())
        .sum()
}

/// Latest best modification time among the files beneath `folder`.
///
/// Falls back to the folder's own filesystem time when it holds no files.
#[must_use]
pub fn folder_latest_mtime(
    folder: &Path,
    history: &dyn CommitTimeSource,
) -> Option<DateTime<Utc>> {
    regular_files(folder)
        .filter_map(|entry| best_modification_time(entry.path(), history))
        .max()
        .or_else(|| filesystem_mtime(folder))
}

fn regular_files(folder: &Path) -> impl Iterator<Item = walkdir::DirEntry> {
    WalkDir::new(folder)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
}
