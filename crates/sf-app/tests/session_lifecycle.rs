//! End-to-end session lifecycle against the real file-backed store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use sf_app::usecases::auth::SignUp;
use sf_app::usecases::onboarding::CompleteOnboarding;
use sf_app::SessionBootstrap;
use sf_core::identity::Identity;
use sf_core::ports::errors::AuthError;
use sf_core::ports::{AuthGatewayPort, KeyValueStorePort};
use sf_core::session::{ScreenState, Shell, CURRENT_STORAGE_VERSION};
use sf_infra::FileKeyValueStore;

struct ScriptedAuth {
    identity_tx: watch::Sender<Option<Identity>>,
}

impl ScriptedAuth {
    fn anonymous() -> Arc<Self> {
        let (identity_tx, _) = watch::channel(None);
        Arc::new(Self { identity_tx })
    }
}

#[async_trait]
impl AuthGatewayPort for ScriptedAuth {
    async fn sign_up(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        let identity = Identity::new("uid-1", email);
        self.identity_tx.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        let identity = Identity::new("uid-1", email);
        self.identity_tx.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.identity_tx.send_replace(None);
        Ok(())
    }

    async fn current_identity(&self) -> Option<Identity> {
        self.identity_tx.borrow().clone()
    }

    fn watch_identity(&self) -> watch::Receiver<Option<Identity>> {
        self.identity_tx.subscribe()
    }
}

/// Fresh install through sign-up, onboarding, and a relaunch.
#[tokio::test]
async fn first_run_to_returning_user() {
    let dir = tempfile::TempDir::new().unwrap();
    let store: Arc<dyn KeyValueStorePort> =
        Arc::new(FileKeyValueStore::with_defaults(dir.path().to_path_buf()));
    let auth = ScriptedAuth::anonymous();

    let session = SessionBootstrap::new(store.clone(), auth.clone(), CURRENT_STORAGE_VERSION);

    // Fresh device, nobody signed in: the decision is deferred.
    assert_eq!(session.start().await, ScreenState::Loading);

    // Sign-up persists the flag and signs the user in.
    SignUp::new(auth.clone(), store.clone())
        .execute("new@example.com", "secret")
        .await
        .unwrap();
    assert_eq!(session.refresh().await, ScreenState::Onboarding);

    // Finishing the tutorial lands on the main shell.
    session.complete_onboarding().await.unwrap();
    assert_eq!(session.screen(), ScreenState::AppShell(Shell::Main));

    // Relaunch with the same store: straight to the main shell.
    let relaunched = SessionBootstrap::new(store.clone(), auth.clone(), CURRENT_STORAGE_VERSION);
    assert_eq!(
        relaunched.start().await,
        ScreenState::AppShell(Shell::Main)
    );
}

/// A version bump wipes the flags, so a signed-in user is owed onboarding.
#[tokio::test]
async fn version_bump_wipes_flags_on_relaunch() {
    let dir = tempfile::TempDir::new().unwrap();
    let store: Arc<dyn KeyValueStorePort> =
        Arc::new(FileKeyValueStore::with_defaults(dir.path().to_path_buf()));
    let auth = ScriptedAuth::anonymous();
    auth.sign_in("ada@example.com", "secret").await.unwrap();

    let session = SessionBootstrap::new(store.clone(), auth.clone(), CURRENT_STORAGE_VERSION);
    assert_eq!(session.start().await, ScreenState::Onboarding);
    CompleteOnboarding::new(store.clone()).execute().await.unwrap();

    // Same store, newer schema version: everything local is discarded.
    let upgraded = SessionBootstrap::new(store.clone(), auth.clone(), "2.0.0");
    assert_eq!(upgraded.start().await, ScreenState::Onboarding);
}
