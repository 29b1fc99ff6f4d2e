//! Command-line arguments for both binaries

use std::path::PathBuf;

use clap::Parser;
use hashmark_core::renamer::{DEFAULT_HASH_WIDTH, DEFAULT_TARGET_FOLDER, RenamerConfig};
use hashmark_core::snapshot::DEFAULT_OUTPUT_FILE;
use hashmark_core::tagging::DEFAULT_CHUNK_SIZE;

/// Embed a content hash into every filename under a folder
#[derive(Debug, Parser)]
#[command(name = "hashmark-rename")]
#[command(author, version, long_about = None)]
pub struct RenameArgs {
    /// Folder to process
    #[arg(long, default_value = DEFAULT_TARGET_FOLDER)]
    pub target: PathBuf,

    /// Number of base-36 symbols in each hash
    #[arg(long, default_value_t = DEFAULT_HASH_WIDTH)]
    pub width: usize,

    /// Bytes read per chunk while hashing
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenameArgs {
    #[must_use]
    pub fn config(&self) -> RenamerConfig {
        RenamerConfig::new(&self.target)
            .with_hash_width(self.width)
            .with_chunk_size(self.chunk_size)
    }
}

/// Write a JSON snapshot of a folder tree
#[derive(Debug, Parser)]
#[command(name = "tree-snapshot")]
#[command(author, version, long_about = None)]
pub struct SnapshotArgs {
    /// Folder to snapshot
    pub target: PathBuf,

    /// Where to write the JSON document
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Process exit code for an argument error: 0 for help/version, 1 otherwise
#[must_use]
pub fn exit_code(error: &clap::Error) -> i32 {
    i32::from(error.use_stderr())
}
