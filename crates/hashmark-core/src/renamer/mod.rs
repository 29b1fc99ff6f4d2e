//! Renamer module: Content-hash tagging of files in place
//!
//! Walks a folder and renames every regular, visible, untagged file to
//! `<stem>._.M<hash>._.<ext>`. Already tagged files are left alone, so
//! running the renamer twice is a no-op.

mod config;
mod run;

pub use config::{DEFAULT_HASH_WIDTH, DEFAULT_TARGET_FOLDER, RenamerConfig};
pub use run::{RenameError, RenameFailure, RenameReport, Renamer};
