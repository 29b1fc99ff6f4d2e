//! Tests for snapshot model types

#![allow(clippy::expect_used)]

use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::snapshot::{Snapshot, TreeEntry};

fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).expect("valid timestamp")
}

fn sample() -> Snapshot {
    Snapshot {
        target_folder: "./site".to_string(),
        generated_at: at(1_700_000_000),
        files: vec![
            TreeEntry::Folder {
                name: "img".to_string(),
                relative_path: "img".to_string(),
                total_size_bytes: 3,
                last_modified_at: at(1_000),
                children: vec![TreeEntry::File {
                    name: "logo.png".to_string(),
                    relative_path: "img/logo.png".to_string(),
                    size_bytes: 3,
                    last_modified_at: at(1_000),
                }],
            },
            TreeEntry::File {
                name: "index.html".to_string(),
                relative_path: "index.html".to_string(),
                size_bytes: 0,
                last_modified_at: at(500),
            },
        ],
    }
}

#[test]
fn test_snapshot_json_shape() {
    let value: Value = serde_json::to_value(sample()).expect("serialize");

    assert_eq!(
        value,
        json!({
            "target_folder": "./site",
            "generated_at": "2023-11-14T22:13:20+00:00",
            "files": [
                {
                    "type": "folder",
                    "name": "img",
                    "relative_path": "img",
                    "total_size_bytes": 3,
                    "last_modified_at": "1970-01-01T00:16:40+00:00",
                    "children": [
                        {
                            "type": "file",
                            "name": "logo.png",
                            "relative_path": "img/logo.png",
                            "size_bytes": 3,
                            "last_modified_at": "1970-01-01T00:16:40+00:00"
                        }
                    ]
                },
                {
                    "type": "file",
                    "name": "index.html",
                    "relative_path": "index.html",
                    "size_bytes": 0,
                    "last_modified_at": "1970-01-01T00:08:20+00:00"
                }
            ]
        })
    );
}

#[test]
fn test_subsecond_timestamps_survive_json() {
    let precise = DateTime::from_timestamp(1_700_000_000, 123_456_000).expect("valid timestamp");
    let mut snapshot = sample();
    snapshot.generated_at = precise;

    let json = snapshot.to_json().expect("serialize");
    let parsed: Snapshot = serde_json::from_str(&json).expect("deserialize");

    assert!(json.contains("2023-11-14T22:13:20.123456+00:00"));
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_json_is_pretty_printed_with_two_spaces() {
    let json = sample().to_json().expect("serialize");

    assert!(json.starts_with("{\n  \"target_folder\""));
}

#[test]
fn test_touch_updates_entry_and_ancestors() {
    let mut snapshot = sample();
    let now = at(1_700_000_000);

    assert!(snapshot.touch(Path::new("img/logo.png"), now));

    let logo = snapshot.find(Path::new("img/logo.png")).expect("logo entry");
    assert_eq!(logo.last_modified_at(), now);
    let img = snapshot.find(Path::new("img")).expect("img entry");
    assert_eq!(img.last_modified_at(), now);
    let index = snapshot.find(Path::new("index.html")).expect("index entry");
    assert_eq!(index.last_modified_at(), at(500));
}

#[test]
fn test_touch_does_not_lower_ancestor_time() {
    let mut snapshot = sample();

    assert!(snapshot.touch(Path::new("img/logo.png"), at(10)));

    let img = snapshot.find(Path::new("img")).expect("img entry");
    assert_eq!(img.last_modified_at(), at(1_000));
}

#[test]
fn test_touch_missing_entry_changes_nothing() {
    let mut snapshot = sample();
    let before = snapshot.clone();

    assert!(!snapshot.touch(Path::new("missing.json"), at(1)));
    assert_eq!(snapshot, before);
}

#[test]
fn test_entry_accessors() {
    let snapshot = sample();
    let img = &snapshot.files[0];

    assert_eq!(img.name(), "img");
    assert!(img.is_folder());
    assert_eq!(img.size(), 3);
    assert_eq!(img.children().len(), 1);
    assert!(img.children()[0].children().is_empty());
}
