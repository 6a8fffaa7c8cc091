//! User profile domain model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("name cannot be empty")]
    EmptyDisplayName,
}

/// Profile document kept in the backend `users` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Normalize a display-name edit: trimmed, and never empty.
pub fn normalize_display_name(raw: &str) -> Result<String, ProfileError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ProfileError::EmptyDisplayName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_display_name("  Ada Lovelace "), Ok("Ada Lovelace".to_string()));
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(normalize_display_name("   "), Err(ProfileError::EmptyDisplayName));
        assert_eq!(normalize_display_name(""), Err(ProfileError::EmptyDisplayName));
    }
}
