//! Use case for completing onboarding.

use std::sync::Arc;

use sf_core::ports::KeyValueStorePort;
use sf_core::session::ONBOARDING_COMPLETED_KEY;

/// Marks the first-run tutorial as seen in the local store.
///
/// This write is the one durable effect of finishing onboarding, so its
/// failure propagates and the caller may retry; everything else in the
/// session flow swallows store errors.
pub struct CompleteOnboarding {
    store: Arc<dyn KeyValueStorePort>,
}

impl CompleteOnboarding {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// Persist `onboardingCompleted = "true"`.
    pub async fn execute(&self) -> anyhow::Result<()> {
        self.store
            .set(ONBOARDING_COMPLETED_KEY, "true")
            .await
            .map_err(anyhow::Error::from)
    }
}
