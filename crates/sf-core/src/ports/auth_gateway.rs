//! Authentication gateway port
//!
//! Contract with the managed auth provider. The provider owns credential
//! storage, token refresh, and session durability; this core only consumes
//! the current identity and the sign-in/sign-up/sign-out actions.

use async_trait::async_trait;
use tokio::sync::watch;

use super::errors::AuthError;
use crate::identity::Identity;

/// Identity observer channel.
///
/// Delivers the current identity at subscribe time and again on every
/// change (sign-in, sign-out), matching the provider's auth-state listener.
pub type IdentityWatch = watch::Receiver<Option<Identity>>;

#[async_trait]
pub trait AuthGatewayPort: Send + Sync {
    /// Create an account and sign the new user in.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// Sign an existing user in.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// The identity right now, without waiting for an observer event.
    async fn current_identity(&self) -> Option<Identity>;

    /// Subscribe to identity changes.
    fn watch_identity(&self) -> IdentityWatch;
}
