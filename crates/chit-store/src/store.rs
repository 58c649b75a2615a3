// store.rs - KvStore trait and the in-memory implementation.
//
// The KvStore trait is the abstraction API for persisting records. The
// durable implementation (JsonFileStore) writes one file per key; the
// MemoryStore backs tests and ephemeral sessions. Either can be swapped
// in without changing the rest of the system.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

use crate::error::StoreError;

/// Trait for persisting and retrieving records under logical keys.
///
/// The raw interface is string-in/string-out; `get_json`/`set_json` layer
/// serde on top and carry the parse-or-default read discipline: any record
/// that is missing or fails to parse reads as `None`.
pub trait KvStore {
    /// Read the raw value under `key`. Absent keys return `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write the raw value under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Deleting an absent key is a no-op, not an error.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    /// Read and deserialize the record under `key`.
    ///
    /// Malformed data is dropped with a warning and reads as absent, so a
    /// corrupt record can never crash a read path.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("dropping malformed record under key '{}': {}", key, e);
                None
            }
        }
    }

    /// Serialize and write the record under `key`.
    fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

/// In-memory KvStore for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.records.remove(key);
        Ok(())
    }
}
