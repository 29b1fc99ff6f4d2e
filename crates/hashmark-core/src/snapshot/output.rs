//! Writing snapshots next to (or inside) the scanned folder

use std::fs;
use std::path::{Path, PathBuf};

use super::{Snapshot, SnapshotError};

/// Output file used when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "folder_structure_utc.json";

/// Path of `output` relative to `target` when it lies inside it.
///
/// `output` need not exist yet, but its parent folder must.
#[must_use]
pub fn relative_output_path(target: &Path, output: &Path) -> Option<PathBuf> {
    let target = target.canonicalize().ok()?;
    let file_name = output.file_name()?;
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let absolute = parent.canonicalize().ok()?.join(file_name);
    absolute.strip_prefix(&target).ok().map(Path::to_path_buf)
}

impl Snapshot {
    /// Write the snapshot as pretty-printed JSON to `path`
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn write_to(&self, path: &Path) -> Result<(), SnapshotError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| SnapshotError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
