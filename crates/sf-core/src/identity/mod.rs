//! Signed-in principal as reported by the external authentication system.

use serde::{Deserialize, Serialize};

/// A signed-in user identity.
///
/// Absence of an identity (`Option<Identity>` being `None`) means the
/// session is anonymous. The authentication provider owns everything else
/// about the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable user id assigned by the auth provider
    pub user_id: String,
    /// Sign-in email
    pub email: String,
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Identity {
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}
