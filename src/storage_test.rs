use super::*;
use crate::types::Whiteboard;

// =============================================================
// MemoryKeyValueStore
// =============================================================

#[test]
fn kv_get_absent_is_none() {
    let store = MemoryKeyValueStore::new();
    assert_eq!(store.get("missing").unwrap(), None);
}

#[test]
fn kv_set_then_get() {
    let mut store = MemoryKeyValueStore::new();
    store.set("k", "v1").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));
}

#[test]
fn kv_set_replaces_previous_value() {
    let mut store = MemoryKeyValueStore::new();
    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
}

#[test]
fn kv_remove_deletes_entry() {
    let mut store = MemoryKeyValueStore::new();
    store.set("k", "v").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn kv_remove_absent_is_ok() {
    let mut store = MemoryKeyValueStore::new();
    assert!(store.remove("missing").is_ok());
}

#[test]
fn kv_contains_tracks_presence() {
    let mut store = MemoryKeyValueStore::new();
    assert!(!store.contains("k").unwrap());
    store.set("k", "v").unwrap();
    assert!(store.contains("k").unwrap());
}

// =============================================================
// MemoryBoardStore
// =============================================================

#[test]
fn board_store_starts_empty() {
    let store = MemoryBoardStore::new();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn board_store_save_then_load() {
    let mut store = MemoryBoardStore::new();
    let boards = vec![Whiteboard::new("A", "u1"), Whiteboard::new("B", "u1")];
    store.save(&boards).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, boards[0].id);
    assert_eq!(loaded[1].id, boards[1].id);
}

#[test]
fn board_store_save_replaces_list() {
    let mut store = MemoryBoardStore::new();
    store.save(&[Whiteboard::new("A", "u1")]).unwrap();
    store.save(&[]).unwrap();
    assert!(store.load().unwrap().is_empty());
}
