//! Storage traits and in-memory implementations.
//!
//! DESIGN
//! ======
//! The store talks to two storage surfaces: a small key-value area for the
//! user record and the onboarding flag, and a dedicated board-list area that
//! persists the whole whiteboard collection in one shot. Both are traits so
//! the app can wire real device storage ([`crate::disk`]) while tests and
//! previews run on the in-memory variants below.
//!
//! ERROR HANDLING
//! ==============
//! Trait methods return `Result` because file-backed implementations can
//! fail; the in-memory ones never do. How failures are absorbed is the
//! store's policy, not the storage layer's.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::types::Whiteboard;

/// Error raised by a storage implementation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying file or directory operation failed.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    /// Stored bytes are not valid JSON for the expected shape.
    #[error("malformed stored record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Key-value persistence for small session records.
///
/// Values are opaque strings; callers serialize to JSON before writing.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the entry under `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing medium cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Whether an entry exists under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing medium cannot be read.
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Whole-list persistence for the whiteboard collection.
pub trait BoardListStore {
    /// Load the stored board list. An empty medium yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the medium cannot be read or decoded.
    fn load(&self) -> Result<Vec<Whiteboard>, StorageError>;

    /// Replace the stored board list with `boards`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the medium cannot be written.
    fn save(&mut self, boards: &[Whiteboard]) -> Result<(), StorageError>;
}

/// Infallible in-memory key-value store.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Infallible in-memory board-list store.
#[derive(Debug, Default)]
pub struct MemoryBoardStore {
    boards: Vec<Whiteboard>,
}

impl MemoryBoardStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardListStore for MemoryBoardStore {
    fn load(&self) -> Result<Vec<Whiteboard>, StorageError> {
        Ok(self.boards.clone())
    }

    fn save(&mut self, boards: &[Whiteboard]) -> Result<(), StorageError> {
        self.boards = boards.to_vec();
        Ok(())
    }
}
