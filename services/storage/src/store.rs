//! The `Store` trait and error taxonomy
//!
//! Implementations hold one JSON document per bucket. Durability and
//! isolation are implementation concerns: the in-memory store gives
//! neither, the file store gives crash durability per mutation.

use crate::bucket::Bucket;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use thiserror::Error;

/// Storage failure taxonomy
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Key-value persistence over named logical buckets
///
/// Writes replace the whole bucket document; there are no partial
/// updates and no atomicity across buckets.
pub trait Store: Send + Sync {
    /// Read a bucket's raw JSON document, if present
    fn get(&self, bucket: Bucket) -> Result<Option<String>, StorageError>;

    /// Replace a bucket's document wholesale
    fn set(&self, bucket: Bucket, value: String) -> Result<(), StorageError>;

    /// Remove a bucket's document, if present
    fn remove(&self, bucket: Bucket) -> Result<(), StorageError>;

    /// Remove every bucket's document
    fn clear_all(&self) -> Result<(), StorageError>;
}

/// Typed JSON convenience layer over [`Store`]
///
/// Blanket-implemented, including for `dyn Store`, so callers behind
/// an `Arc<dyn Store>` get typed access without downcasting.
pub trait StoreExt: Store {
    /// Read and deserialize a bucket's document
    fn get_json<T: DeserializeOwned>(&self, bucket: Bucket) -> Result<Option<T>, StorageError> {
        match self.get(bucket)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    /// Serialize and write a bucket's document
    fn set_json<T: Serialize + ?Sized>(
        &self,
        bucket: Bucket,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.set(bucket, raw)
    }
}

impl<S: Store + ?Sized> StoreExt for S {}
