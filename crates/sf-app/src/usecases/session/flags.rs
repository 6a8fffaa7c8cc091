//! Tri-state flag reads with corruption recovery.

use sf_core::ports::KeyValueStorePort;
use sf_core::session::Flag;

/// Read a persisted tri-state flag.
///
/// Never returns anything outside `{True, False, Unset}` and never lets a
/// store failure escape:
/// - absent key → `Unset`;
/// - exactly `"true"` / `"false"` → that value;
/// - any other stored value is corruption: the key is removed best-effort
///   and `Unset` is returned;
/// - a read failure is logged, the key is removed best-effort, and `Unset`
///   is returned.
pub async fn read_flag(store: &dyn KeyValueStorePort, key: &str) -> Flag {
    match store.get(key).await {
        Ok(None) => Flag::Unset,
        Ok(Some(raw)) => match Flag::from_stored(&raw) {
            Some(flag) => flag,
            None => {
                tracing::warn!(key, value = %raw, "corrupt flag value, discarding");
                remove_best_effort(store, key).await;
                Flag::Unset
            }
        },
        Err(err) => {
            tracing::warn!(key, error = %err, "flag read failed, treating as unset");
            remove_best_effort(store, key).await;
            Flag::Unset
        }
    }
}

async fn remove_best_effort(store: &dyn KeyValueStorePort, key: &str) {
    if let Err(err) = store.remove(key).await {
        tracing::warn!(key, error = %err, "could not remove flag key");
    }
}
