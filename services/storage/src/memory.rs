//! Concurrent in-memory store
//!
//! Backing store for tests and single-process demos. State lives only
//! as long as the process; cloning shares nothing (wrap in `Arc` to
//! share).

use crate::bucket::Bucket;
use crate::store::{StorageError, Store};
use dashmap::DashMap;

/// In-memory bucket map
#[derive(Debug, Default)]
pub struct MemoryStore {
    // Keyed by the stable bucket key so dumps read like the file format
    buckets: DashMap<&'static str, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            buckets: DashMap::new(),
        }
    }

    /// Number of populated buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, bucket: Bucket) -> Result<Option<String>, StorageError> {
        Ok(self.buckets.get(bucket.key()).map(|v| v.value().clone()))
    }

    fn set(&self, bucket: Bucket, value: String) -> Result<(), StorageError> {
        self.buckets.insert(bucket.key(), value);
        Ok(())
    }

    fn remove(&self, bucket: Bucket) -> Result<(), StorageError> {
        self.buckets.remove(bucket.key());
        Ok(())
    }

    fn clear_all(&self) -> Result<(), StorageError> {
        self.buckets.clear();
        Ok(())
    }
}
