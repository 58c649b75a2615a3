// error.rs - Error types for the persistence layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while persisting records.
///
/// Reads never produce these: a record that cannot be read or parsed is
/// treated as absent. Only writes and deletes can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize a record for storage.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
