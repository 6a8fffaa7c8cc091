//! Use case for creating an account.

use std::sync::Arc;

use sf_core::identity::Identity;
use sf_core::ports::{errors::AuthError, AuthGatewayPort, KeyValueStorePort};
use sf_core::session::HAS_SIGNED_UP_KEY;

use super::normalize_email;

pub struct SignUp {
    auth: Arc<dyn AuthGatewayPort>,
    store: Arc<dyn KeyValueStorePort>,
}

impl SignUp {
    pub fn new(auth: Arc<dyn AuthGatewayPort>, store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { auth, store }
    }

    /// Create the account, then mark this device as having signed up.
    ///
    /// The flag write is best-effort: a local-store hiccup must not undo a
    /// sign-up the backend already accepted.
    pub async fn execute(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let identity = self.auth.sign_up(&normalize_email(email), password).await?;

        if let Err(err) = self.store.set(HAS_SIGNED_UP_KEY, "true").await {
            tracing::warn!(error = %err, "could not persist hasSignedUp after sign-up");
        }

        Ok(identity)
    }
}
