//! # chit-store
//!
//! Namespaced key-value persistence for chit.
//!
//! Every record the application keeps (user, goal list, pick history, lock
//! flag) lives under one logical key in a [`KvStore`]. The trait is the
//! injection seam: production code uses the durable [`JsonFileStore`],
//! tests use the in-memory [`MemoryStore`].
//!
//! Reads follow a parse-or-default discipline: a missing or malformed
//! record is reported as absent, never as an error. A corrupt file can
//! lose its own record, but it can never take the application down.

pub mod error;
pub mod json_file;
pub mod store;

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use store::{KvStore, MemoryStore};
