//! Snapshot model types

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One file or folder in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeEntry {
    File {
        /// Display name, hash tag removed
        name: String,
        relative_path: String,
        size_bytes: u64,
        #[serde(with = "iso_utc")]
        last_modified_at: DateTime<Utc>,
    },
    Folder {
        name: String,
        relative_path: String,
        /// Sum of every regular file beneath this folder
        total_size_bytes: u64,
        /// Latest best modification time among descendant files
        #[serde(with = "iso_utc")]
        last_modified_at: DateTime<Utc>,
        children: Vec<TreeEntry>,
    },
}

impl TreeEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Folder { name, .. } => name,
        }
    }

    #[must_use]
    pub fn relative_path(&self) -> &str {
        match self {
            Self::File { relative_path, .. } | Self::Folder { relative_path, .. } => relative_path,
        }
    }

    /// File size, or total size for a folder
    #[must_use]
    pub fn size(&self) -> u64 {
        match self {
            Self::File { size_bytes, .. } => *size_bytes,
            Self::Folder {
                total_size_bytes, ..
            } => *total_size_bytes,
        }
    }

    #[must_use]
    pub fn last_modified_at(&self) -> DateTime<Utc> {
        match self {
            Self::File {
                last_modified_at, ..
            }
            | Self::Folder {
                last_modified_at, ..
            } => *last_modified_at,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[TreeEntry] {
        match self {
            Self::File { .. } => &[],
            Self::Folder { children, .. } => children,
        }
    }

    #[must_use]
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    fn last_modified_mut(&mut self) -> &mut DateTime<Utc> {
        match self {
            Self::File {
                last_modified_at, ..
            }
            | Self::Folder {
                last_modified_at, ..
            } => last_modified_at,
        }
    }

    fn touch(&mut self, relative_path: &Path, at: DateTime<Utc>) -> bool {
        if Path::new(self.relative_path()) == relative_path {
            *self.last_modified_mut() = at;
            return true;
        }
        let found = match self {
            Self::File { .. } => false,
            Self::Folder { children, .. } => touch_any(children, relative_path, at),
        };
        if found {
            let latest = self.last_modified_mut();
            if at > *latest {
                *latest = at;
            }
        }
        found
    }
}

fn touch_any(entries: &mut [TreeEntry], relative_path: &Path, at: DateTime<Utc>) -> bool {
    entries
        .iter_mut()
        .any(|entry| entry.touch(relative_path, at))
}

/// A complete snapshot document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Target folder as it was given
    pub target_folder: String,
    #[serde(with = "iso_utc")]
    pub generated_at: DateTime<Utc>,
    pub files: Vec<TreeEntry>,
}

impl Snapshot {
    /// Set the timestamp of the entry at `relative_path` to `at`.
    ///
    /// Folders containing the entry are raised to at least `at`. Returns
    /// whether an entry was found.
    pub fn touch(&mut self, relative_path: &Path, at: DateTime<Utc>) -> bool {
        touch_any(&mut self.files, relative_path, at)
    }

    /// Find an entry by its relative path
    #[must_use]
    pub fn find(&self, relative_path: &Path) -> Option<&TreeEntry> {
        let mut pending: Vec<&TreeEntry> = self.files.iter().collect();
        while let Some(entry) = pending.pop() {
            if Path::new(entry.relative_path()) == relative_path {
                return Some(entry);
            }
            pending.extend(entry.children());
        }
        None
    }

    /// Serialize as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// RFC 3339 timestamps with an explicit `+00:00` offset
mod iso_utc {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, false))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
