//! JSON-file-backed store
//!
//! Persists the full bucket map as one pretty-printed JSON object and
//! rewrites the file on every mutation. Bucket contents are themselves
//! JSON documents stored as strings, so the on-disk shape matches the
//! exported snapshot format.

use crate::bucket::Bucket;
use crate::store::{StorageError, Store};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Whole-map JSON file store
///
/// A missing file is an empty store. Keys in the file that do not name
/// a known bucket are dropped on load.
pub struct JsonFileStore {
    path: PathBuf,
    // BTreeMap keeps the file diff-stable across rewrites
    buckets: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading existing contents if present
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let buckets = Self::load(&path)?;
        Ok(Self {
            path,
            buckets: Mutex::new(buckets),
        })
    }

    /// Path this store persists to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(path)?;
        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let known = parsed
            .into_iter()
            .filter(|(key, _)| Bucket::from_key(key).is_some())
            .collect::<BTreeMap<_, _>>();
        debug!(path = %path.display(), buckets = known.len(), "loaded bucket file");
        Ok(known)
    }

    fn persist(&self, buckets: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(buckets)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.buckets.lock().expect("bucket map lock poisoned")
    }
}

impl Store for JsonFileStore {
    fn get(&self, bucket: Bucket) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(bucket.key()).cloned())
    }

    fn set(&self, bucket: Bucket, value: String) -> Result<(), StorageError> {
        let mut buckets = self.lock();
        buckets.insert(bucket.key().to_string(), value);
        self.persist(&buckets)
    }

    fn remove(&self, bucket: Bucket) -> Result<(), StorageError> {
        let mut buckets = self.lock();
        if buckets.remove(bucket.key()).is_some() {
            self.persist(&buckets)?;
        }
        Ok(())
    }

    fn clear_all(&self) -> Result<(), StorageError> {
        let mut buckets = self.lock();
        buckets.clear();
        self.persist(&buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_path(tmp: &TempDir) -> PathBuf {
        tmp.path().join("relique-demo.json")
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::open(store_path(&tmp)).unwrap();
        assert_eq!(store.get(Bucket::Listings).unwrap(), None);
    }

    #[test]
    fn test_set_survives_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = store_path(&tmp);

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set(Bucket::Listings, "[1,2,3]".to_string()).unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get(Bucket::Listings).unwrap(),
            Some("[1,2,3]".to_string())
        );
    }

    #[test]
    fn test_remove_survives_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = store_path(&tmp);

        let store = JsonFileStore::open(&path).unwrap();
        store.set(Bucket::Posts, "[]".to_string()).unwrap();
        store.remove(Bucket::Posts).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get(Bucket::Posts).unwrap(), None);
    }

    #[test]
    fn test_clear_all_persists() {
        let tmp = TempDir::new().unwrap();
        let path = store_path(&tmp);

        let store = JsonFileStore::open(&path).unwrap();
        store.set(Bucket::Listings, "[]".to_string()).unwrap();
        store.set(Bucket::Favorites, "[]".to_string()).unwrap();
        store.clear_all().unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get(Bucket::Listings).unwrap(), None);
        assert_eq!(reopened.get(Bucket::Favorites).unwrap(), None);
    }

    #[test]
    fn test_unknown_keys_dropped_on_load() {
        let tmp = TempDir::new().unwrap();
        let path = store_path(&tmp);
        fs::write(
            &path,
            r#"{"relique.listings": "[]", "legacy.cart": "[]"}"#,
        )
        .unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get(Bucket::Listings).unwrap(), Some("[]".to_string()));
        // The unknown key is gone after the next rewrite
        store.set(Bucket::Posts, "[]".to_string()).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("legacy.cart"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = store_path(&tmp);
        fs::write(&path, "{ not json").unwrap();

        let result = JsonFileStore::open(&path);
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/deeper/state.json");
        let store = JsonFileStore::open(&path).unwrap();
        store.set(Bucket::Events, "[]".to_string()).unwrap();
        assert!(path.exists());
    }
}
