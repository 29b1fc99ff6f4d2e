//! Tests for the rename command

#![allow(clippy::expect_used)]

use std::fs;

use hashmark_cli::commands::rename;
use hashmark_core::renamer::RenamerConfig;
use hashmark_core::tagging::{HashedFilename, is_tagged};
use tempfile::TempDir;

#[test]
fn test_rename_command_tags_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("app.js"), b"console.log(1)").expect("Failed to write file");

    let report = rename::run(RenamerConfig::new(temp_dir.path()).with_hash_width(12))
        .expect("rename failed");

    assert_eq!(report.renamed.len(), 1);
    let (_, new_path) = &report.renamed[0];
    let name = new_path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("utf-8 name");
    assert!(is_tagged(name));
    let parsed = HashedFilename::parse(name).expect("tagged name");
    assert_eq!(parsed.stem, "app");
    assert_eq!(parsed.extension, "js");
    assert_eq!(parsed.hash.len(), 12);
}

#[test]
fn test_rename_command_missing_target_errors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = rename::run(RenamerConfig::new(temp_dir.path().join("missing")));

    let err = result.expect_err("should fail");
    assert!(format!("{err:#}").contains("Not a directory"));
}
