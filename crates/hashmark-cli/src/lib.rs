//! hashmark-cli library
//!
//! Argument types and command runners shared by the `hashmark-rename` and
//! `tree-snapshot` binaries, exposed so they can be tested directly.

pub mod args;
pub mod commands;
pub mod logging;

pub use args::{RenameArgs, SnapshotArgs, exit_code};
pub use logging::{filter_for, setup_logging};
