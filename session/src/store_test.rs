use super::*;

fn temp_session_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("admin-session-{}", uuid::Uuid::new_v4()))
        .join("session.json")
}

// =============================================================
// MemorySessionStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemorySessionStore::new();
    assert_eq!(store.get(), None);
    assert!(!store.has_token());
}

#[test]
fn memory_store_set_then_get() {
    let store = MemorySessionStore::new();
    store.set("tok-1").expect("set");
    assert_eq!(store.get().as_deref(), Some("tok-1"));
}

#[test]
fn memory_store_second_set_replaces() {
    let store = MemorySessionStore::new();
    store.set("tok-1").expect("set");
    store.set("tok-2").expect("set");
    assert_eq!(store.get().as_deref(), Some("tok-2"));
}

#[test]
fn memory_store_clones_share_slot() {
    let store = MemorySessionStore::new();
    let other = store.clone();
    store.set("shared").expect("set");
    assert_eq!(other.get().as_deref(), Some("shared"));
    other.clear().expect("clear");
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_rejects_empty_token() {
    let store = MemorySessionStore::with_token("keep");
    assert!(matches!(store.set(""), Err(StoreError::EmptyToken)));
    assert_eq!(store.get().as_deref(), Some("keep"));
}

#[test]
fn memory_store_seeded_empty_reads_as_absent() {
    let store = MemorySessionStore::with_token("");
    assert_eq!(store.get(), None);
}

// =============================================================
// FileSessionStore
// =============================================================

#[test]
fn file_store_missing_file_reads_as_absent() {
    let store = FileSessionStore::new(temp_session_path());
    assert_eq!(store.get(), None);
}

#[test]
fn file_store_set_creates_parent_and_persists() {
    let path = temp_session_path();
    let store = FileSessionStore::new(&path);
    store.set("file-tok").expect("set");

    let reopened = FileSessionStore::new(&path);
    assert_eq!(reopened.get().as_deref(), Some("file-tok"));

    let raw = std::fs::read_to_string(&path).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value[SESSION_KEY], "file-tok");
}

#[test]
fn file_store_overwrite_leaves_no_temp_file() {
    let path = temp_session_path();
    let store = FileSessionStore::new(&path);
    store.set("a").expect("set");
    store.set("b").expect("set");
    assert_eq!(store.get().as_deref(), Some("b"));

    let entries: Vec<_> = std::fs::read_dir(path.parent().expect("parent"))
        .expect("read dir")
        .map(|e| e.expect("entry").file_name())
        .collect();
    assert_eq!(entries, ["session.json"]);
}

#[test]
fn file_store_temp_names_are_unique_per_write() {
    let store = FileSessionStore::new(temp_session_path());
    assert_ne!(store.temp_path(), store.temp_path());
}

#[test]
fn file_store_concurrent_writers_all_succeed() {
    let path = temp_session_path();
    std::thread::scope(|scope| {
        for writer in 0..8 {
            let store = FileSessionStore::new(&path);
            scope.spawn(move || {
                for round in 0..20 {
                    store.set(&format!("tok-{writer}-{round}")).expect("concurrent set");
                }
            });
        }
    });
    let token = FileSessionStore::new(&path).get().expect("token");
    assert!(token.starts_with("tok-"));
}

#[cfg(unix)]
#[test]
fn file_store_token_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let path = temp_session_path();
    FileSessionStore::new(&path).set("secret").expect("set");
    let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn file_store_clear_removes_token_and_is_idempotent() {
    let store = FileSessionStore::new(temp_session_path());
    store.set("gone-soon").expect("set");
    store.clear().expect("clear");
    assert_eq!(store.get(), None);
    store.clear().expect("second clear");
}

#[test]
fn file_store_corrupt_file_reads_as_absent() {
    let path = temp_session_path();
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(&path, "not json").expect("write");
    let store = FileSessionStore::new(&path);
    assert_eq!(store.get(), None);
}

#[test]
fn file_store_rejects_empty_token_without_touching_file() {
    let path = temp_session_path();
    let store = FileSessionStore::new(&path);
    store.set("original").expect("set");
    assert!(matches!(store.set(""), Err(StoreError::EmptyToken)));
    assert_eq!(store.get().as_deref(), Some("original"));
}
