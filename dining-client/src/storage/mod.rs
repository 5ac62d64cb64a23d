//! Local blob storage
//!
//! Key-value store of JSON blobs, the only state that survives a restart.
//!
//! # Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `cart` | JSON array of `CartLine` |
//! | `locationReviews` | JSON object: location id → array of `LocationReview` |
//!
//! There is no schema versioning. A blob that fails to parse is logged and
//! treated as absent (see [`load_or_default`]).

mod memory;
mod redb_store;

pub use memory::MemoryStore;
pub use redb_store::RedbStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;

/// Cart lines
pub const CART_KEY: &str = "cart";

/// Location reviews
pub const LOCATION_REVIEWS_KEY: &str = "locationReviews";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value blob storage
///
/// Access is synchronous and local. A single session is the only writer,
/// so implementations do no cross-process coordination.
pub trait BlobStore {
    /// Raw value stored under `key`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete `key` (no-op when absent)
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// Read and parse the JSON value under `key`, failing soft
///
/// A missing key yields `T::default()`. Read and parse failures are logged
/// and also yield `T::default()`; they are never propagated.
pub fn load_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: BlobStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            error!(key, error = %e, "Failed to read stored value, starting empty");
            return T::default();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        error!(key, error = %e, "Failed to parse stored value, starting empty");
        T::default()
    })
}

/// Serialize `value` as JSON and store it under `key`
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized,
    S: BlobStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
