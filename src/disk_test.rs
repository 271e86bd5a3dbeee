use tempfile::TempDir;

use super::*;
use crate::types::Whiteboard;

// =============================================================
// FileKeyValueStore
// =============================================================

#[test]
fn file_kv_get_absent_is_none() {
    let dir = TempDir::new().unwrap();
    let store = FileKeyValueStore::new(dir.path());
    assert_eq!(store.get("missing").unwrap(), None);
}

#[test]
fn file_kv_set_then_get() {
    let dir = TempDir::new().unwrap();
    let mut store = FileKeyValueStore::new(dir.path());
    store.set("flag", "true").unwrap();
    assert_eq!(store.get("flag").unwrap().as_deref(), Some("true"));
}

#[test]
fn file_kv_creates_missing_directory_on_write() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("deep").join("nested");
    let mut store = FileKeyValueStore::new(&nested);
    store.set("k", "v").unwrap();
    assert!(nested.join("k.json").exists());
}

#[test]
fn file_kv_remove_deletes_file() {
    let dir = TempDir::new().unwrap();
    let mut store = FileKeyValueStore::new(dir.path());
    store.set("k", "v").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
    assert!(!dir.path().join("k.json").exists());
}

#[test]
fn file_kv_remove_absent_is_ok() {
    let dir = TempDir::new().unwrap();
    let mut store = FileKeyValueStore::new(dir.path());
    assert!(store.remove("missing").is_ok());
}

// =============================================================
// FileBoardStore
// =============================================================

#[test]
fn file_boards_load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileBoardStore::new(dir.path());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn file_boards_load_empty_file_is_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(BOARDS_FILE), "  \n").unwrap();
    let store = FileBoardStore::new(dir.path());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn file_boards_save_then_load() {
    let dir = TempDir::new().unwrap();
    let mut store = FileBoardStore::new(dir.path());
    let boards = vec![Whiteboard::new("A", "u1")];
    store.save(&boards).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, boards[0].id);
    assert_eq!(loaded[0].members, vec!["u1".to_owned()]);
}

#[test]
fn file_boards_corrupt_file_is_malformed_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(BOARDS_FILE), "{not json").unwrap();
    let store = FileBoardStore::new(dir.path());
    let result = store.load();
    assert!(matches!(result, Err(StorageError::Malformed(_))));
}

// =============================================================
// Data directory
// =============================================================

#[test]
fn default_data_dir_ends_with_app_name() {
    if let Some(dir) = default_data_dir() {
        assert!(dir.ends_with(DATA_DIR_NAME));
    }
}
