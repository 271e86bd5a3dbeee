//! File-backed JSON storage for real devices.
//!
//! SYSTEM CONTEXT
//! ==============
//! On device, the key-value area maps to one small JSON file per key and the
//! board list to a single `whiteboards.json`, all under one app data
//! directory. Writes go through `std::fs` directly; the surrounding app is
//! single-threaded UI-driven, so there is no locking or write batching here.

#[cfg(test)]
#[path = "disk_test.rs"]
mod disk_test;

use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::{BoardListStore, KeyValueStore, StorageError};
use crate::types::Whiteboard;

/// File name holding the serialized whiteboard list.
pub const BOARDS_FILE: &str = "whiteboards.json";

/// Directory name for this app under the platform data dir.
pub const DATA_DIR_NAME: &str = "boardstore";

/// Per-platform default data directory (e.g. `~/.local/share/boardstore`).
///
/// Returns `None` when the platform reports no data directory; callers pick
/// an explicit path in that case.
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|base| base.join(DATA_DIR_NAME))
}

/// Key-value store writing one `<key>.json` file per key.
#[derive(Debug)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Board-list store persisting the whole collection to one JSON file.
#[derive(Debug)]
pub struct FileBoardStore {
    path: PathBuf,
}

impl FileBoardStore {
    /// Create a store writing [`BOARDS_FILE`] under `dir`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { path: dir.as_ref().join(BOARDS_FILE) }
    }
}

impl BoardListStore for FileBoardStore {
    fn load(&self) -> Result<Vec<Whiteboard>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&mut self, boards: &[Whiteboard]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(boards)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
