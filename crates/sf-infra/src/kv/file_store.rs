//! File-backed local key-value store
//!
//! Persists the session flags as a single JSON object in the application
//! data directory. Every operation is a full read-modify-write of that one
//! small file, serialized through a mutex so concurrent calls cannot
//! interleave half-written maps.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use sf_core::ports::{errors::StoreError, KeyValueStorePort};

pub const DEFAULT_STORE_FILE: &str = "local_store.json";

pub struct FileKeyValueStore {
    store_file_path: PathBuf,
    file_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create a store with a custom file path.
    pub fn new(store_file_path: PathBuf) -> Self {
        Self {
            store_file_path,
            file_lock: Mutex::new(()),
        }
    }

    /// Create a store with base dir and the default filename.
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_STORE_FILE))
    }

    /// Store under the platform's local data directory.
    pub fn in_app_data_dir() -> anyhow::Result<Self> {
        let base = dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("no local data directory available"))?;
        Ok(Self::with_defaults(base.join("stayfinder")))
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.store_file_path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.store_file_path)
            .await
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| StoreError::ReadFailed(e.to_string()))
    }

    async fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.store_file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        fs::write(&self.store_file_path, json)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.file_lock.lock().await;
        Ok(self.load().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.file_lock.lock().await;
        let mut values = self
            .load()
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.file_lock.lock().await;
        let mut values = self
            .load()
            .await
            .map_err(|e| StoreError::RemoveFailed(e.to_string()))?;
        if values.remove(key).is_some() {
            self.save(&values)
                .await
                .map_err(|e| StoreError::RemoveFailed(e.to_string()))?;
        }
        Ok(())
    }

    async fn list_keys(&self) -> Result<Vec<String>, StoreError> {
        let _guard = self.file_lock.lock().await;
        let values = self
            .load()
            .await
            .map_err(|e| StoreError::ListFailed(e.to_string()))?;
        Ok(values.keys().cloned().collect())
    }

    async fn remove_many(&self, keys: &[String]) -> Result<(), StoreError> {
        let _guard = self.file_lock.lock().await;
        let mut values = self
            .load()
            .await
            .map_err(|e| StoreError::RemoveFailed(e.to_string()))?;
        for key in keys {
            values.remove(key);
        }
        self.save(&values)
            .await
            .map_err(|e| StoreError::RemoveFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> FileKeyValueStore {
        FileKeyValueStore::with_defaults(dir.path().to_path_buf())
    }

    #[tokio::test]
    async fn get_returns_none_before_any_write() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store(&dir).get("onboardingCompleted").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let kv = store(&dir);

        kv.set("onboardingCompleted", "true").await.unwrap();
        assert_eq!(
            kv.get("onboardingCompleted").await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn values_survive_reopening_the_store() {
        let dir = TempDir::new().unwrap();
        store(&dir).set("hasSignedUp", "true").await.unwrap();

        let reopened = store(&dir);
        assert_eq!(
            reopened.get("hasSignedUp").await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let kv = store(&dir);

        kv.set("hasSignedUp", "true").await.unwrap();
        kv.remove("hasSignedUp").await.unwrap();
        kv.remove("hasSignedUp").await.unwrap();
        assert_eq!(kv.get("hasSignedUp").await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_and_remove_many_cover_all_keys() {
        let dir = TempDir::new().unwrap();
        let kv = store(&dir);

        kv.set("a", "1").await.unwrap();
        kv.set("b", "2").await.unwrap();
        kv.set("c", "3").await.unwrap();

        let keys = kv.list_keys().await.unwrap();
        assert_eq!(keys.len(), 3);

        kv.remove_many(&keys).await.unwrap();
        assert!(kv.list_keys().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unparseable_file_reports_read_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_STORE_FILE);
        std::fs::write(&path, "{not json").unwrap();

        let kv = FileKeyValueStore::new(path);
        assert!(matches!(
            kv.get("anything").await,
            Err(StoreError::ReadFailed(_))
        ));
    }
}
