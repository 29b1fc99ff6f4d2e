//! hashmark-core: Content-hash file tagging and filesystem tree snapshots
//!
//! Two independent pipelines share this library:
//!
//! - **renamer** - embeds a fixed-width base-36 content hash into every
//!   filename under a folder (`photo.jpg` -> `photo._.M<hash>._.jpg`)
//! - **snapshot** - walks a folder and produces a JSON-serializable tree of
//!   sizes and best-known modification times, using git history when the
//!   folder lives inside a repository

pub mod history;
pub mod renamer;
pub mod snapshot;
pub mod tagging;

// Re-export commonly used types
pub use history::{CommitTimeSource, GitHistory, NoHistory, discover_repository_root};
pub use renamer::{RenameError, RenameReport, Renamer, RenamerConfig};
pub use snapshot::{Snapshot, SnapshotBuilder, SnapshotError, TreeEntry};
pub use tagging::{ContentDigest, HashedFilename, is_tagged, strip_tag};
