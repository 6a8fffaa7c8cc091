//! Local-store schema migration.
//!
//! When the stored `storage_version` marker does not match the version this
//! build expects, every locally persisted key is discarded. A stale flag
//! must never survive a schema change; missing keys only ever default to
//! "unanswered".

use std::sync::Arc;

use sf_core::ports::{errors::StoreError, KeyValueStorePort};
use sf_core::session::{KNOWN_FLAG_KEYS, STORAGE_VERSION_KEY};

/// What `MigrateLocalStore::execute` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// Stored marker already matched; nothing was touched.
    UpToDate,
    /// Marker mismatched and the bulk wipe succeeded.
    Wiped,
    /// Bulk wipe failed; the known flag keys were removed individually,
    /// tolerating per-key failures.
    WipedDegraded,
}

/// Use case for reconciling the local store to the current schema version.
///
/// Infallible by design: no store failure here may abort startup, so the
/// signature returns an outcome instead of a `Result`.
pub struct MigrateLocalStore {
    store: Arc<dyn KeyValueStorePort>,
    expected_version: String,
}

impl MigrateLocalStore {
    pub fn new(store: Arc<dyn KeyValueStorePort>, expected_version: impl Into<String>) -> Self {
        Self {
            store,
            expected_version: expected_version.into(),
        }
    }

    /// Run the migration. Idempotent: a second call with no intervening
    /// writes is a no-op.
    pub async fn execute(&self) -> MigrationOutcome {
        let stored = match self.store.get(STORAGE_VERSION_KEY).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "could not read storage_version, will migrate");
                None
            }
        };

        if stored.as_deref() == Some(self.expected_version.as_str()) {
            return MigrationOutcome::UpToDate;
        }

        tracing::info!(
            stored = stored.as_deref().unwrap_or("<absent>"),
            expected = %self.expected_version,
            "storage version mismatch, clearing local store"
        );

        let outcome = match self.wipe_all().await {
            Ok(()) => MigrationOutcome::Wiped,
            Err(err) => {
                tracing::warn!(error = %err, "bulk wipe failed, removing known keys individually");
                self.wipe_known_keys().await;
                MigrationOutcome::WipedDegraded
            }
        };

        if let Err(err) = self
            .store
            .set(STORAGE_VERSION_KEY, &self.expected_version)
            .await
        {
            tracing::warn!(error = %err, "could not write storage_version marker");
        }

        outcome
    }

    async fn wipe_all(&self) -> Result<(), StoreError> {
        let keys = self.store.list_keys().await?;
        if keys.is_empty() {
            return Ok(());
        }
        self.store.remove_many(&keys).await
    }

    async fn wipe_known_keys(&self) {
        for key in KNOWN_FLAG_KEYS {
            if let Err(err) = self.store.remove(key).await {
                tracing::warn!(key, error = %err, "could not remove key during fallback wipe");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeStore {
        values: Mutex<BTreeMap<String, String>>,
        fail_bulk: bool,
        fail_everything: bool,
    }

    impl FakeStore {
        fn seeded(entries: &[(&str, &str)]) -> Self {
            Self {
                values: Mutex::new(
                    entries
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                ),
                ..Default::default()
            }
        }

        fn snapshot(&self) -> BTreeMap<String, String> {
            self.values.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl KeyValueStorePort for FakeStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            if self.fail_everything {
                return Err(StoreError::ReadFailed("broken".into()));
            }
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.fail_everything {
                return Err(StoreError::WriteFailed("broken".into()));
            }
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<(), StoreError> {
            if self.fail_everything {
                return Err(StoreError::RemoveFailed("broken".into()));
            }
            self.values.lock().unwrap().remove(key);
            Ok(())
        }

        async fn list_keys(&self) -> Result<Vec<String>, StoreError> {
            if self.fail_bulk || self.fail_everything {
                return Err(StoreError::ListFailed("broken".into()));
            }
            Ok(self.values.lock().unwrap().keys().cloned().collect())
        }

        async fn remove_many(&self, keys: &[String]) -> Result<(), StoreError> {
            if self.fail_bulk || self.fail_everything {
                return Err(StoreError::RemoveFailed("broken".into()));
            }
            let mut values = self.values.lock().unwrap();
            for key in keys {
                values.remove(key);
            }
            Ok(())
        }
    }

    fn migrator(store: Arc<FakeStore>) -> MigrateLocalStore {
        MigrateLocalStore::new(store, "1.0.1")
    }

    #[tokio::test]
    async fn matching_version_is_a_no_op() {
        let store = Arc::new(FakeStore::seeded(&[
            (STORAGE_VERSION_KEY, "1.0.1"),
            ("onboardingCompleted", "true"),
            ("hasSignedUp", "false"),
        ]));
        let before = store.snapshot();

        let outcome = migrator(store.clone()).execute().await;

        assert_eq!(outcome, MigrationOutcome::UpToDate);
        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn version_mismatch_wipes_everything_and_stamps_marker() {
        let store = Arc::new(FakeStore::seeded(&[
            (STORAGE_VERSION_KEY, "0.9.0"),
            ("onboardingCompleted", "true"),
            ("hasSignedUp", "true"),
            ("some_cache", "junk"),
        ]));

        let outcome = migrator(store.clone()).execute().await;

        assert_eq!(outcome, MigrationOutcome::Wiped);
        let after = store.snapshot();
        assert_eq!(after.get(STORAGE_VERSION_KEY).map(String::as_str), Some("1.0.1"));
        assert!(!after.contains_key("onboardingCompleted"));
        assert!(!after.contains_key("hasSignedUp"));
        assert!(!after.contains_key("some_cache"));
    }

    #[tokio::test]
    async fn absent_version_triggers_wipe() {
        let store = Arc::new(FakeStore::seeded(&[("onboardingCompleted", "true")]));

        migrator(store.clone()).execute().await;

        let after = store.snapshot();
        assert!(!after.contains_key("onboardingCompleted"));
        assert_eq!(after.get(STORAGE_VERSION_KEY).map(String::as_str), Some("1.0.1"));
    }

    #[tokio::test]
    async fn bulk_failure_falls_back_to_known_keys() {
        let mut store = FakeStore::seeded(&[
            (STORAGE_VERSION_KEY, "0.9.0"),
            ("onboardingCompleted", "true"),
            ("hasSignedUp", "true"),
            ("unknown_key", "kept"),
        ]);
        store.fail_bulk = true;
        let store = Arc::new(store);

        let outcome = migrator(store.clone()).execute().await;

        assert_eq!(outcome, MigrationOutcome::WipedDegraded);
        let after = store.snapshot();
        assert!(!after.contains_key("onboardingCompleted"));
        assert!(!after.contains_key("hasSignedUp"));
        // Keys outside the known set survive the degraded path.
        assert!(after.contains_key("unknown_key"));
        assert_eq!(after.get(STORAGE_VERSION_KEY).map(String::as_str), Some("1.0.1"));
    }

    #[tokio::test]
    async fn fully_broken_store_never_panics_or_errors() {
        let mut store = FakeStore::default();
        store.fail_everything = true;
        let store = Arc::new(store);

        let outcome = migrator(store).execute().await;

        assert_eq!(outcome, MigrationOutcome::WipedDegraded);
    }

    #[tokio::test]
    async fn running_twice_equals_running_once() {
        let store = Arc::new(FakeStore::seeded(&[
            (STORAGE_VERSION_KEY, "0.9.0"),
            ("onboardingCompleted", "true"),
        ]));
        let migrate = migrator(store.clone());

        let first = migrate.execute().await;
        let after_first = store.snapshot();

        let second = migrate.execute().await;
        let after_second = store.snapshot();

        assert_eq!(first, MigrationOutcome::Wiped);
        assert_eq!(second, MigrationOutcome::UpToDate);
        assert_eq!(after_first, after_second);
    }
}
