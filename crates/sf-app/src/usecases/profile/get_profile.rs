//! Use case for loading the profile document.

use std::sync::Arc;

use sf_core::ports::{errors::BackendError, UserRepositoryPort};
use sf_core::profile::UserProfile;

pub struct GetProfile {
    users: Arc<dyn UserRepositoryPort>,
}

impl GetProfile {
    pub fn new(users: Arc<dyn UserRepositoryPort>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, user_id: &str) -> Result<Option<UserProfile>, BackendError> {
        self.users.get(user_id).await
    }
}
