// json_file.rs - JsonFileStore: durable KvStore backed by one file per key.
//
// Each logical key is stored as `<store_dir>/<key>.json`. The directory is
// the namespace; two stores pointed at different directories never see
// each other's records. This keeps records isolated and easy to inspect
// manually, and it survives process restarts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::store::KvStore;

/// File-backed KvStore, one JSON file per key.
pub struct JsonFileStore {
    store_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given directory.
    /// Creates the directory if it doesn't exist.
    pub fn new(store_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store_dir = store_dir.as_ref().to_path_buf();
        fs::create_dir_all(&store_dir).map_err(|source| StoreError::Io {
            path: store_dir.clone(),
            source,
        })?;
        Ok(Self { store_dir })
    }

    /// Path to the file for a given key.
    fn key_file(&self, key: &str) -> PathBuf {
        self.store_dir.join(format!("{}.json", key))
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        // Missing and unreadable files both read as absent.
        fs::read_to_string(self.key_file(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_file(key);
        fs::write(&path, value).map_err(|source| StoreError::Io { path, source })
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.key_file(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}
