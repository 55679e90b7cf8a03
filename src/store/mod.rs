//! Persistent key-value backing store.
//!
//! The overlay engine is written against the `KeyValueStore` capability so
//! the real origin-scoped browser store can be swapped for an in-memory
//! fake in tests, or a file-backed store in native embeddings.

mod file;

pub use file::FileStore;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::StorageError;

/// A synchronous, origin-scoped string key/value store with no expiry.
///
/// `get` returning `Ok(None)` means the key is absent. Implementations
/// surface read/write failures as errors; the overlay engine decides how
/// failures degrade.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backing store. Whole-value replacement per key, no expiry.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backing store for execution contexts with no storage capability
/// (the server-side rendering case). Every operation reports unavailable.
#[derive(Debug, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable(
            "no backing store in this execution context".to_string(),
        ))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(
            "no backing store in this execution context".to_string(),
        ))
    }
}
