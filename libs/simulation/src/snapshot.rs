//! Storage snapshot export
//!
//! Serializes the full set of populated buckets to one JSON document
//! for download/upload style demo workflows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use storage::{Bucket, StorageError, Store};

/// Versioned dump of every populated bucket
///
/// Bucket contents are kept as raw JSON strings, so a snapshot
/// round-trips byte-for-byte regardless of the documents' schemas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSnapshot {
    pub version: String,
    pub buckets: BTreeMap<String, String>,
}

impl StorageSnapshot {
    /// Capture the current contents of every populated bucket
    pub fn capture(store: &dyn Store) -> Result<Self, StorageError> {
        let mut buckets = BTreeMap::new();
        for bucket in Bucket::ALL {
            if let Some(value) = store.get(bucket)? {
                buckets.insert(bucket.key().to_string(), value);
            }
        }
        Ok(Self {
            version: crate::VERSION.to_string(),
            buckets,
        })
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Parse a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of captured buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
