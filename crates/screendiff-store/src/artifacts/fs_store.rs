//! Artifact store seam and its filesystem implementation

use crate::artifacts::atomic::atomic_write;
use crate::errors::{invalid_key, io_error, not_found, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Text artifacts addressed by slash-separated keys.
pub trait ArtifactStore {
    /// # Errors
    ///
    /// `ERR_NOT_FOUND` when nothing is stored under `key`.
    fn read_text(&self, key: &str) -> Result<String>;

    /// Store `content` under `key`, replacing any previous artifact.
    ///
    /// # Errors
    ///
    /// `ERR_IO` when the artifact cannot be written.
    fn write_text(&self, key: &str, content: &str) -> Result<()>;

    /// # Errors
    ///
    /// `ERR_INVALID_INPUT` for keys the store cannot address.
    fn exists(&self, key: &str) -> Result<bool>;
}

/// Keys mapped onto files below a root directory
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    root: PathBuf,
}

impl FsArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `key` below the root; keys may not escape it.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            return Err(invalid_key(key, "empty key"));
        }
        let relative = Path::new(key);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(invalid_key(key, "key must be a relative path without `.` or `..`"));
        }
        Ok(self.root.join(relative))
    }
}

impl ArtifactStore for FsArtifactStore {
    fn read_text(&self, key: &str) -> Result<String> {
        let path = self.path_for(key)?;
        if !path.is_file() {
            return Err(not_found(key));
        }
        fs::read_to_string(&path).map_err(|e| io_error("read_text", key, e))
    }

    fn write_text(&self, key: &str, content: &str) -> Result<()> {
        let path = self.path_for(key)?;
        atomic_write(&path, content.as_bytes(), key)?;
        debug!(key, bytes = content.len(), "artifact written");
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.path_for(key)?.is_file())
    }
}
