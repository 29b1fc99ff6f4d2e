//! Tests for commit time sources

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::history::{CommitTimeSource, NoHistory};

struct Fixed(DateTime<Utc>);

impl CommitTimeSource for Fixed {
    fn last_commit_time(&self, _path: &Path) -> Option<DateTime<Utc>> {
        Some(self.0)
    }
}

#[test]
fn test_no_history_is_always_none() {
    assert_eq!(NoHistory.last_commit_time(Path::new("anything")), None);
}

#[test]
fn test_absent_source_is_none() {
    let source: Option<Fixed> = None;

    assert_eq!(source.last_commit_time(Path::new("a.txt")), None);
}

#[test]
fn test_present_source_delegates() {
    let when = DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default();
    let source = Some(Fixed(when));

    assert_eq!(source.last_commit_time(Path::new("a.txt")), Some(when));
}

#[test]
fn test_reference_and_trait_object_delegate() {
    let when = DateTime::from_timestamp(42, 0).unwrap_or_default();
    let fixed = Fixed(when);
    let dynamic: &dyn CommitTimeSource = &fixed;

    assert_eq!(
        <&Fixed as CommitTimeSource>::last_commit_time(&&fixed, Path::new("x")),
        Some(when)
    );
    assert_eq!(dynamic.last_commit_time(Path::new("x")), Some(when));
}
