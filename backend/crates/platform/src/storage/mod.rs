//! Key/Value Storage Infrastructure
//!
//! A string-keyed, string-valued durable store. The account context keeps
//! its persisted session record and the ban list here.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Storage result alias
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    /// Key cannot be mapped onto the backend
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Backend I/O failed
    #[error("Storage I/O failed for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Trait for key/value storage backends
///
/// `put` replaces the whole value; there is no partial update primitive.
#[trait_variant::make(KeyValueStore: Send)]
pub trait LocalKeyValueStore {
    /// Read a value, `None` when the key is absent
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    async fn put(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}
