//! History module: Version-control modification times
//!
//! The snapshot builder asks a [`CommitTimeSource`] for the last commit
//! touching a file and falls back to filesystem time when it gets nothing.
//! Git is one such source; [`NoHistory`] is the filesystem-only mode.

mod git;

use std::path::Path;

use chrono::{DateTime, Utc};

pub use git::{GitHistory, discover_repository_root};

/// Something that knows when a file was last committed
pub trait CommitTimeSource {
    /// Time of the most recent commit touching `path`, in UTC.
    ///
    /// `None` when the file has no history or history is unavailable.
    fn last_commit_time(&self, path: &Path) -> Option<DateTime<Utc>>;
}

/// Source with no history at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl CommitTimeSource for NoHistory {
    fn last_commit_time(&self, _path: &Path) -> Option<DateTime<Utc>> {
        None
    }
}

impl<T: CommitTimeSource> CommitTimeSource for Option<T> {
    fn last_commit_time(&self, path: &Path) -> Option<DateTime<Utc>> {
        self.as_ref().and_then(|source| source.last_commit_time(path))
    }
}

impl<T: CommitTimeSource + ?Sized> CommitTimeSource for &T {
    fn last_commit_time(&self, path: &Path) -> Option<DateTime<Utc>> {
        (**self).last_commit_time(path)
    }
}

#[cfg(test)]
mod tests;
