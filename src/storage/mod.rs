//! Key-value persistence used by history and theme.
//!
//! Callers receive a storage handle instead of reaching for a global; the
//! file-backed store is used by the binary and the in-memory store by tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

/// Errors from reading or writing persisted state.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode or decode stored JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A string-keyed, string-valued store.
///
/// Handles are cheap to clone and clones share the same underlying data.
pub trait KeyValueStore: Clone {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
