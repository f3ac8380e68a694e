//! In-memory session slots
//!
//! Used by tests and by the CLI when no session directory is configured.

use crate::error::{validate_key, StorageError};
use harmony_core::SessionStorage;
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local key-value slots
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.lock().map(|slots| slots.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemorySessionStorage {
    fn read(&self, key: &str) -> harmony_core::Result<Option<String>> {
        validate_key(key)?;
        let slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> harmony_core::Result<()> {
        validate_key(key)?;
        let mut slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> harmony_core::Result<()> {
        validate_key(key)?;
        let mut slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_remove() {
        let storage = MemorySessionStorage::new();
        assert_eq!(storage.read("user").unwrap(), None);

        storage.write("user", "{}").unwrap();
        assert_eq!(storage.read("user").unwrap().as_deref(), Some("{}"));
        assert_eq!(storage.len(), 1);

        storage.remove("user").unwrap();
        assert!(storage.is_empty());

        // Removing again is fine
        storage.remove("user").unwrap();
    }

    #[test]
    fn invalid_key_is_an_error() {
        let storage = MemorySessionStorage::new();
        assert!(storage.write("../etc", "x").is_err());
    }
}
