//! Local key-value store port
//!
//! Contract for the on-device durable key-value store that holds the
//! session flags. Implementations are provided by the infrastructure layer
//! (file-backed JSON, in-memory for tests). No ordering guarantee is
//! assumed across keys; every operation may fail independently.

use async_trait::async_trait;

use super::errors::StoreError;

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read a raw value. `Ok(None)` means the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, creating the key if needed. Last write wins.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Enumerate every key currently present.
    async fn list_keys(&self) -> Result<Vec<String>, StoreError>;

    /// Remove a set of keys in one bulk operation.
    async fn remove_many(&self, keys: &[String]) -> Result<(), StoreError>;
}
