//! Integration tests for session slot backends
//!
//! Exercises the file-backed store against a real temporary directory and
//! the typed user helpers from core against both backends.

use harmony_core::storage::{clear_user, load_user, save_user, USER_KEY};
use harmony_core::{HarmonyError, Provider, Service, SessionStorage, User};
use harmony_storage::{FileSessionStorage, MemorySessionStorage};
use tempfile::TempDir;

// ===== Helpers =====

fn create_user() -> User {
    let mut user = User::new("123456", "demo@harmony.app", "Demo User");
    user.upsert_service(Service::connected(
        "spotify-1",
        Provider::Spotify,
        "mock-token",
        "mock-refresh-token",
        chrono::Utc::now().timestamp_millis() + 3_600_000,
    ));
    user.upsert_service(Service::disconnected("deezer-1", Provider::Deezer));
    user
}

fn open_temp() -> (TempDir, FileSessionStorage) {
    let dir = TempDir::new().unwrap();
    let storage = FileSessionStorage::open(dir.path().join("session")).unwrap();
    (dir, storage)
}

// ===== File backend =====

#[test]
fn open_creates_directory() {
    let (_dir, storage) = open_temp();
    assert!(storage.dir().is_dir());
}

#[test]
fn missing_slot_reads_as_none() {
    let (_dir, storage) = open_temp();
    assert_eq!(storage.read(USER_KEY).unwrap(), None);
}

#[test]
fn user_survives_reopen() {
    let (dir, storage) = open_temp();
    let user = create_user();
    save_user(&storage, &user).unwrap();
    drop(storage);

    let reopened = FileSessionStorage::open(dir.path().join("session")).unwrap();
    let restored = load_user(&reopened).unwrap();

    assert_eq!(restored, Some(user));
}

#[test]
fn slot_is_plain_json_file() {
    let (_dir, storage) = open_temp();
    save_user(&storage, &create_user()).unwrap();

    let raw = std::fs::read_to_string(storage.dir().join("user.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["name"], "Demo User");
    assert_eq!(value["services"][0]["name"], "spotify");
}

#[test]
fn overwrite_replaces_previous_value() {
    let (_dir, storage) = open_temp();
    storage.write("user", "first").unwrap();
    storage.write("user", "second").unwrap();
    assert_eq!(storage.read("user").unwrap().as_deref(), Some("second"));

    // No temp files left behind
    let entries: Vec<_> = std::fs::read_dir(storage.dir()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn clear_user_deletes_file_and_is_idempotent() {
    let (_dir, storage) = open_temp();
    save_user(&storage, &create_user()).unwrap();

    clear_user(&storage).unwrap();
    assert!(!storage.dir().join("user.json").exists());
    assert_eq!(load_user(&storage).unwrap(), None);

    clear_user(&storage).unwrap();
}

#[test]
fn corrupt_slot_is_a_serialization_error() {
    let (_dir, storage) = open_temp();
    storage.write(USER_KEY, "{not json").unwrap();

    let err = load_user(&storage).unwrap_err();
    assert!(matches!(err, HarmonyError::Serialization(_)));
}

#[test]
fn path_traversal_keys_are_rejected() {
    let (_dir, storage) = open_temp();
    let err = storage.write("../escape", "x").unwrap_err();
    assert!(matches!(err, HarmonyError::Storage(_)));
}

// ===== Memory backend =====

#[test]
fn memory_backend_round_trips_user() {
    let storage = MemorySessionStorage::new();
    let user = create_user();

    save_user(&storage, &user).unwrap();
    assert_eq!(load_user(&storage).unwrap(), Some(user));

    clear_user(&storage).unwrap();
    assert!(storage.is_empty());
}
