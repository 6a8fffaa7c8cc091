//! Session bootstrap coordinator.
//!
//! Runs the store migration, then turns identity-observer events plus the
//! persisted flags into screen states published on a watch channel. The
//! navigation layer subscribes and renders whatever this publishes; no
//! failure path here may ever leave the user stuck on loading.

use std::sync::Arc;

use tokio::sync::watch;

use sf_core::identity::Identity;
use sf_core::ports::{AuthGatewayPort, KeyValueStorePort};
use sf_core::session::{
    resolve_initial_screen, Resolution, ScreenState, SessionAction, SessionEvent,
    SessionStateMachine, Shell, HAS_SIGNED_UP_KEY, ONBOARDING_COMPLETED_KEY,
};

use super::{read_flag, MigrateLocalStore};
use crate::usecases::onboarding::CompleteOnboarding;

/// Coordinates startup screen selection.
pub struct SessionBootstrap {
    store: Arc<dyn KeyValueStorePort>,
    auth: Arc<dyn AuthGatewayPort>,
    migration: MigrateLocalStore,
    onboarding: CompleteOnboarding,
    screen_tx: watch::Sender<ScreenState>,
}

impl SessionBootstrap {
    pub fn new(
        store: Arc<dyn KeyValueStorePort>,
        auth: Arc<dyn AuthGatewayPort>,
        expected_storage_version: impl Into<String>,
    ) -> Self {
        let (screen_tx, _) = watch::channel(ScreenState::Loading);
        Self {
            migration: MigrateLocalStore::new(store.clone(), expected_storage_version),
            onboarding: CompleteOnboarding::new(store.clone()),
            store,
            auth,
            screen_tx,
        }
    }

    /// Subscribe to screen changes. Delivers the current state immediately.
    pub fn watch_screen(&self) -> watch::Receiver<ScreenState> {
        self.screen_tx.subscribe()
    }

    /// The screen currently committed.
    pub fn screen(&self) -> ScreenState {
        *self.screen_tx.borrow()
    }

    /// One reconciliation pass: migrate the store, then resolve against the
    /// identity known right now. Returns the committed screen.
    pub async fn start(&self) -> ScreenState {
        self.migration.execute().await;
        let identity = self.auth.current_identity().await;
        self.resolve_and_commit(identity.as_ref()).await
    }

    /// Full bootstrap loop: one migration pass, then a re-resolution for
    /// every identity-observer delivery until the observer closes.
    pub async fn run(&self) {
        self.migration.execute().await;
        let mut identities = self.auth.watch_identity();
        loop {
            let identity = identities.borrow_and_update().clone();
            self.resolve_and_commit(identity.as_ref()).await;
            if identities.changed().await.is_err() {
                break;
            }
        }
    }

    /// React to the user finishing the first-run tutorial: persist the flag
    /// and move to the main shell.
    pub async fn complete_onboarding(&self) -> anyhow::Result<()> {
        let (_, actions) = self.apply(SessionEvent::OnboardingCompleted);
        for action in actions {
            match action {
                SessionAction::PersistOnboardingCompleted => {
                    self.onboarding.execute().await?;
                }
            }
        }
        Ok(())
    }

    /// Re-read flags and identity, then resolve again.
    ///
    /// The sign-up flow calls this after persisting `hasSignedUp`, which is
    /// what settles the deferred anonymous-fresh-device branch.
    pub async fn refresh(&self) -> ScreenState {
        let identity = self.auth.current_identity().await;
        self.resolve_and_commit(identity.as_ref()).await
    }

    async fn resolve_and_commit(&self, identity: Option<&Identity>) -> ScreenState {
        let resolution = match self.evaluate(identity).await {
            Ok(resolution) => resolution,
            Err(err) => {
                tracing::warn!(error = %err, "screen resolution failed, failing open to the app shell");
                match identity {
                    Some(_) => Resolution::AppShell(Shell::Main),
                    None => Resolution::AppShell(Shell::Auth),
                }
            }
        };
        let (state, _) = self.apply(SessionEvent::Resolved(resolution));
        state
    }

    /// Gather the decision inputs. Flag reads are already failure-proof;
    /// this boundary exists so anything unexpected still fails open above.
    async fn evaluate(&self, identity: Option<&Identity>) -> anyhow::Result<Resolution> {
        let onboarding = read_flag(self.store.as_ref(), ONBOARDING_COMPLETED_KEY).await;
        let signed_up = read_flag(self.store.as_ref(), HAS_SIGNED_UP_KEY).await;
        Ok(resolve_initial_screen(identity, onboarding, signed_up))
    }

    fn apply(&self, event: SessionEvent) -> (ScreenState, Vec<SessionAction>) {
        let mut next_state = ScreenState::Loading;
        let mut actions = Vec::new();
        self.screen_tx.send_if_modified(|state| {
            let (next, emitted) = SessionStateMachine::transition(*state, event);
            next_state = next;
            actions = emitted;
            if next != *state {
                *state = next;
                true
            } else {
                false
            }
        });
        (next_state, actions)
    }
}
