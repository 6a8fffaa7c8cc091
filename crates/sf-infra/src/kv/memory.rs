//! In-memory key-value store, used by integration tests and demos.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use sf_core::ports::{errors::StoreError, KeyValueStorePort};

#[derive(Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with initial entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: Mutex::new(map),
        }
    }
}

#[async_trait]
impl KeyValueStorePort for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.lock().await.remove(key);
        Ok(())
    }

    async fn list_keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.values.lock().await.keys().cloned().collect())
    }

    async fn remove_many(&self, keys: &[String]) -> Result<(), StoreError> {
        let mut values = self.values.lock().await;
        for key in keys {
            values.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_entries_are_visible() {
        let kv = MemoryKeyValueStore::with_entries([("storage_version", "1.0.1")]);
        assert_eq!(
            kv.get("storage_version").await.unwrap().as_deref(),
            Some("1.0.1")
        );
    }

    #[tokio::test]
    async fn remove_many_clears_listed_keys_only() {
        let kv = MemoryKeyValueStore::with_entries([("a", "1"), ("b", "2"), ("c", "3")]);
        kv.remove_many(&["a".to_string(), "c".to_string()])
            .await
            .unwrap();
        assert_eq!(kv.list_keys().await.unwrap(), vec!["b".to_string()]);
    }
}
