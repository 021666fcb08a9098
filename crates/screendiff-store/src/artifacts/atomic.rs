//! Atomic write primitive
//!
//! Writes go to a sibling temp file that is renamed over the target, so a
//! reader never sees a partially written artifact.

use crate::errors::{io_error, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Atomically replace `target_path` with `content`, creating parent
/// directories as needed. `key` is only used for error context.
pub fn atomic_write(target_path: &Path, content: &[u8], key: &str) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_artifact_dir", key, e))?;
    }

    let temp_path = temp_path_for(target_path);
    fs::write(&temp_path, content).map_err(|e| io_error("write_artifact_temp", key, e))?;
    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename_artifact_temp", key, e));
    }

    Ok(())
}

/// `<name>.tmp` next to the target; appending keeps `a.diff` and
/// `a.diff.yaml` from sharing a temp file.
fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    target_path.with_file_name(name)
}
