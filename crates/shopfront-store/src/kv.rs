//! # Key-Value Store
//!
//! The storage abstraction every repository is written against.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  KeyValueStore                                                          │
//! │  ├── get_raw(key)        → Option<String>   (required)                  │
//! │  ├── set_raw(key, json)                     (required)                  │
//! │  ├── remove(key)                            (required)                  │
//! │  │                                                                      │
//! │  ├── load_or(key, default) → T              (provided, typed)           │
//! │  └── save(key, &T)                          (provided, typed)           │
//! │                                                                         │
//! │  Implementations: MemoryStore (tests), JsonFileStore (app)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes always replace the whole value for a key; the last write wins.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::{StoreError, StoreResult};

/// A synchronous string-valued key-value store.
pub trait KeyValueStore {
    /// Raw JSON stored under `key`, if any.
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the value under `key`.
    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Loads and decodes `key`.
    ///
    /// A missing key yields `default`. So does a value that no longer
    /// parses; that case is logged and the bad value left in place until
    /// the next save overwrites it.
    fn load_or<T>(&self, key: &str, default: T) -> StoreResult<T>
    where
        T: DeserializeOwned,
        Self: Sized,
    {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(default);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(key = %key, error = %err, "Stored value unreadable, using default");
                Ok(default)
            }
        }
    }

    /// Encodes and stores `value` under `key`.
    fn save<T>(&self, key: &str, value: &T) -> StoreResult<()>
    where
        T: Serialize + ?Sized,
        Self: Sized,
    {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::serialization(key, e))?;
        self.set_raw(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_raw(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// Process-local store, used in tests and when no data directory is wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> StoreResult<R> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        Ok(f(&mut entries))
    }

    /// Whether anything is stored under `key`.
    pub fn contains(&self, key: &str) -> StoreResult<bool> {
        self.with_entries(|entries| entries.contains_key(key))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        self.with_entries(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_or_missing_key_returns_default() {
        let store = MemoryStore::new();
        let value: Vec<i64> = store.load_or("numbers", vec![7]).unwrap();
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        store.save("numbers", &vec![1, 2, 3]).unwrap();
        let value: Vec<i64> = store.load_or("numbers", Vec::new()).unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_unparseable_value_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set_raw("numbers", "{not json").unwrap();
        let value: Vec<i64> = store.load_or("numbers", vec![0]).unwrap();
        assert_eq!(value, vec![0]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set_raw("cart", "[]").unwrap();
        store.remove("cart").unwrap();
        store.remove("cart").unwrap();
        assert!(!store.contains("cart").unwrap());
    }

    #[test]
    fn test_reference_is_a_store() {
        let store = MemoryStore::new();
        let borrowed = &store;
        borrowed.save("flag", &true).unwrap();
        assert!(store.load_or("flag", false).unwrap());
    }
}
