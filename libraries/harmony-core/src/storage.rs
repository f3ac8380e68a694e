//! Session slot abstraction
//!
//! Harmony persists exactly one thing between runs: the logged-in user. The
//! backing store is a plain string key-value slot so that an in-memory map, a
//! directory of JSON files, or browser-style local storage can all serve it.

use crate::error::Result;
use crate::types::User;

/// Key under which the serialized user record lives
pub const USER_KEY: &str = "user";

/// Key-value slot storage for session data
pub trait SessionStorage: Send + Sync {
    /// Read the value stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// Load the persisted user, if any
pub fn load_user(storage: &dyn SessionStorage) -> Result<Option<User>> {
    match storage.read(USER_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Persist the user as JSON
pub fn save_user(storage: &dyn SessionStorage, user: &User) -> Result<()> {
    let json = serde_json::to_string(user)?;
    storage.write(USER_KEY, &json)
}

/// Delete the persisted user
pub fn clear_user(storage: &dyn SessionStorage) -> Result<()> {
    storage.remove(USER_KEY)
}
