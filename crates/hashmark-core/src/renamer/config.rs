//! Renamer configuration

use std::path::PathBuf;

use crate::tagging::DEFAULT_CHUNK_SIZE;

/// Folder renamed when no target is given
pub const DEFAULT_TARGET_FOLDER: &str = "./static/asset/";

/// Number of base-36 symbols embedded in each name
pub const DEFAULT_HASH_WIDTH: usize = 16;

/// Configuration for a rename run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamerConfig {
    pub target_folder: PathBuf,
    pub hash_width: usize,
    pub chunk_size: usize,
}

impl RenamerConfig {
    /// Configuration for `target_folder` with default width and chunk size
    #[must_use]
    pub fn new(target_folder: impl Into<PathBuf>) -> Self {
        Self {
            target_folder: target_folder.into(),
            hash_width: DEFAULT_HASH_WIDTH,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Set the hash width
    #[must_use]
    pub fn with_hash_width(mut self, hash_width: usize) -> Self {
        self.hash_width = hash_width;
        self
    }

    /// Set the read chunk size
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_FOLDER)
    }
}
