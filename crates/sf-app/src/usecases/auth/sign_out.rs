//! Use case for ending the current session.

use std::sync::Arc;

use sf_core::ports::{errors::AuthError, AuthGatewayPort};

pub struct SignOut {
    auth: Arc<dyn AuthGatewayPort>,
}

impl SignOut {
    pub fn new(auth: Arc<dyn AuthGatewayPort>) -> Self {
        Self { auth }
    }

    /// Sign out. The identity observer fires with `None`, which re-resolves
    /// the screen; `hasSignedUp` stays set so the device skips onboarding.
    pub async fn execute(&self) -> Result<(), AuthError> {
        self.auth.sign_out().await
    }
}
