//! Tests for command-line argument parsing

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use clap::Parser;
use hashmark_cli::{RenameArgs, SnapshotArgs, exit_code};
use hashmark_core::renamer::{DEFAULT_HASH_WIDTH, DEFAULT_TARGET_FOLDER};
use hashmark_core::snapshot::DEFAULT_OUTPUT_FILE;
use hashmark_core::tagging::DEFAULT_CHUNK_SIZE;

#[test]
fn test_rename_without_arguments_uses_defaults() {
    let args = RenameArgs::try_parse_from(["hashmark-rename"]).expect("parse");

    assert_eq!(args.target, PathBuf::from(DEFAULT_TARGET_FOLDER));
    assert_eq!(args.width, DEFAULT_HASH_WIDTH);
    assert_eq!(args.chunk_size, DEFAULT_CHUNK_SIZE);
    assert!(!args.verbose);
}

#[test]
fn test_rename_overrides_build_config() {
    let args = RenameArgs::try_parse_from([
        "hashmark-rename",
        "--target",
        "/srv/assets",
        "--width",
        "8",
        "--chunk-size",
        "1024",
        "-v",
    ])
    .expect("parse");

    let config = args.config();
    assert_eq!(config.target_folder, PathBuf::from("/srv/assets"));
    assert_eq!(config.hash_width, 8);
    assert_eq!(config.chunk_size, 1024);
    assert!(args.verbose);
}

#[test]
fn test_rename_rejects_positional_arguments() {
    let err = RenameArgs::try_parse_from(["hashmark-rename", "extra"]).expect_err("should fail");

    assert_eq!(exit_code(&err), 1);
}

#[test]
fn test_snapshot_with_target_only_uses_default_output() {
    let args = SnapshotArgs::try_parse_from(["tree-snapshot", "./site"]).expect("parse");

    assert_eq!(args.target, PathBuf::from("./site"));
    assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
}

#[test]
fn test_snapshot_with_target_and_output() {
    let args =
        SnapshotArgs::try_parse_from(["tree-snapshot", "./site", "out/tree.json"]).expect("parse");

    assert_eq!(args.output, PathBuf::from("out/tree.json"));
}

#[test]
fn test_snapshot_without_target_is_usage_error() {
    let err = SnapshotArgs::try_parse_from(["tree-snapshot"]).expect_err("should fail");

    assert_eq!(exit_code(&err), 1);
}

#[test]
fn test_snapshot_with_too_many_arguments_is_usage_error() {
    let err = SnapshotArgs::try_parse_from(["tree-snapshot", "a", "b", "c"]).expect_err("should fail");

    assert_eq!(exit_code(&err), 1);
}

#[test]
fn test_help_exits_successfully() {
    let err = SnapshotArgs::try_parse_from(["tree-snapshot", "--help"]).expect_err("help exits");

    assert_eq!(exit_code(&err), 0);
}
