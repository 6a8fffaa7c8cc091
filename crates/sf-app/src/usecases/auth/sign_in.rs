//! Use case for signing an existing user in.

use std::sync::Arc;

use sf_core::identity::Identity;
use sf_core::ports::{errors::AuthError, AuthGatewayPort};

use super::normalize_email;

pub struct SignIn {
    auth: Arc<dyn AuthGatewayPort>,
}

impl SignIn {
    pub fn new(auth: Arc<dyn AuthGatewayPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.auth.sign_in(&normalize_email(email), password).await
    }
}
