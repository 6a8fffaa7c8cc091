//! HTTP auth gateway
//!
//! Talks to the backend's auth endpoints and publishes identity changes on
//! a watch channel, so the session bootstrap sees sign-in and sign-out as
//! observer events the same way it would from a managed auth SDK.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::info;

use sf_core::identity::Identity;
use sf_core::ports::{errors::AuthError, AuthGatewayPort, IdentityWatch};

pub struct HttpAuthGateway {
    http: reqwest::Client,
    base_url: String,
    identity_tx: watch::Sender<Option<Identity>>,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct IdentityBody {
    user_id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl From<IdentityBody> for Identity {
    fn from(body: IdentityBody) -> Self {
        Identity {
            user_id: body.user_id,
            email: body.email,
            display_name: body.display_name,
        }
    }
}

impl HttpAuthGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let (identity_tx, _) = watch::channel(None);
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            identity_tx,
        }
    }

    async fn post_credentials(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(&CredentialsBody { email, password })
            .send()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;

        let status = response.status();
        match status.as_u16() {
            200 | 201 => {}
            401 => return Err(AuthError::InvalidCredentials),
            409 => return Err(AuthError::EmailTaken),
            code => return Err(AuthError::Service(format!("unexpected status {code}"))),
        }

        let body: IdentityBody = response
            .json()
            .await
            .map_err(|e| AuthError::Service(e.to_string()))?;
        Ok(body.into())
    }
}

#[async_trait]
impl AuthGatewayPort for HttpAuthGateway {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let identity = self.post_credentials("/auth/signup", email, password).await?;
        info!(user_id = %identity.user_id, "signed up");
        self.identity_tx.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let identity = self.post_credentials("/auth/signin", email, password).await?;
        info!(user_id = %identity.user_id, "signed in");
        self.identity_tx.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let url = format!("{}/auth/signout", self.base_url);
        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Service(format!(
                "unexpected status {}",
                response.status().as_u16()
            )));
        }

        self.identity_tx.send_replace(None);
        Ok(())
    }

    async fn current_identity(&self) -> Option<Identity> {
        self.identity_tx.borrow().clone()
    }

    fn watch_identity(&self) -> IdentityWatch {
        self.identity_tx.subscribe()
    }
}
