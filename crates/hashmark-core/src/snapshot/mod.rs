//! Snapshot module: JSON snapshots of a folder tree
//!
//! Captures every file and folder with its size and best-known
//! modification time. Times come from git history when the folder is in a
//! repository and from the filesystem otherwise; all are UTC.

mod builder;
mod metadata;
mod model;
mod output;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use builder::SnapshotBuilder;
pub use metadata::{
    best_modification_time, filesystem_mtime, folder_latest_mtime, folder_total_size,
};
pub use model::{Snapshot, TreeEntry};
pub use output::{DEFAULT_OUTPUT_FILE, relative_output_path};

/// Errors that can occur while building or writing a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Target path '{}' is not a valid folder", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests;
