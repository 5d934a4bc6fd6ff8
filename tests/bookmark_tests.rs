//! Tests for the bookmark set and its JSON persistence.
//!
//! Verifies toggle idempotence, duplicate healing, and that a persisted set
//! round-trips through the storage port — including the silent fallback to
//! an empty set on missing or corrupted files.

use regbrowse::domain::BookmarkSet;
use regbrowse::storage::{BookmarkStore, JsonBookmarkStore};

#[test]
fn toggle_twice_restores_original_content() {
    let mut set = BookmarkSet::from_ids(vec!["2024-00001".to_string()]);
    let before = set.ids().to_vec();

    assert!(set.toggle("2024-05000"));
    assert!(set.contains("2024-05000"));

    assert!(!set.toggle("2024-05000"));
    assert!(!set.contains("2024-05000"));
    assert_eq!(set.ids(), before.as_slice());
}

#[test]
fn from_ids_drops_duplicates_preserving_order() {
    let set = BookmarkSet::from_ids(vec![
        "b".to_string(),
        "a".to_string(),
        "b".to_string(),
        "c".to_string(),
        "a".to_string(),
    ]);
    assert_eq!(set.ids(), ["b", "a", "c"]);
    assert_eq!(set.len(), 3);
}

#[test]
fn save_then_load_round_trips_as_a_set() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bookmarks.json");

    let mut store = JsonBookmarkStore::new(path.clone());
    let ids = vec!["2024-05000".to_string(), "2024-04817".to_string()];
    store.save(&ids).expect("save");

    let reloaded = JsonBookmarkStore::new(path).load().expect("load");
    let original: std::collections::HashSet<_> = ids.iter().collect();
    let restored: std::collections::HashSet<_> = reloaded.iter().collect();
    assert_eq!(original, restored);
}

#[test]
fn missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonBookmarkStore::new(dir.path().join("nope.json"));
    assert!(store.load().expect("load").is_empty());
}

#[test]
fn malformed_file_heals_to_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bookmarks.json");
    std::fs::write(&path, "{not json at all").expect("write");

    let store = JsonBookmarkStore::new(path);
    assert!(store.load().expect("load").is_empty());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("deeper").join("bookmarks.json");

    let mut store = JsonBookmarkStore::new(path.clone());
    store.save(&["2024-05000".to_string()]).expect("save");
    assert!(path.exists());
}

#[test]
fn bookmark_survives_reload_and_unbookmark_removes_it_everywhere() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bookmarks.json");

    // Bookmark a document and persist.
    let mut set = BookmarkSet::new();
    set.toggle("2024-05000");
    let mut store = JsonBookmarkStore::new(path.clone());
    store.save(set.ids()).expect("save");

    // A fresh session sees it bookmarked.
    let reloaded = BookmarkSet::from_ids(JsonBookmarkStore::new(path.clone()).load().expect("load"));
    assert!(reloaded.contains("2024-05000"));

    // Unbookmark, persist, reload: gone from memory and storage.
    let mut set = reloaded;
    set.toggle("2024-05000");
    assert!(!set.contains("2024-05000"));
    store.save(set.ids()).expect("save");

    let reloaded = BookmarkSet::from_ids(JsonBookmarkStore::new(path).load().expect("load"));
    assert!(!reloaded.contains("2024-05000"));
    assert!(reloaded.is_empty());
}
