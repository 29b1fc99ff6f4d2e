//! CLI commands

pub mod rename;
pub mod snapshot;
