//! Use case for editing the profile display name.

use std::sync::Arc;

use sf_core::ports::UserRepositoryPort;
use sf_core::profile::normalize_display_name;

pub struct UpdateDisplayName {
    users: Arc<dyn UserRepositoryPort>,
}

impl UpdateDisplayName {
    pub fn new(users: Arc<dyn UserRepositoryPort>) -> Self {
        Self { users }
    }

    /// Validate the edit and write it to the profile document.
    pub async fn execute(&self, user_id: &str, raw_name: &str) -> anyhow::Result<String> {
        let name = normalize_display_name(raw_name)?;
        self.users.update_display_name(user_id, &name).await?;
        Ok(name)
    }
}
