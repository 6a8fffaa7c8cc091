//! User profile repository port.

use async_trait::async_trait;

use super::errors::BackendError;
use crate::profile::UserProfile;

#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    async fn get(&self, user_id: &str) -> Result<Option<UserProfile>, BackendError>;

    /// Update the display name on the profile document.
    async fn update_display_name(&self, user_id: &str, name: &str) -> Result<(), BackendError>;
}
