//! Initial-screen resolution and the session screen state machine.
//!
//! Defines a pure decision table over identity and the two persisted flags,
//! and a pure state transition function for the startup screen flow.

use serde::{Deserialize, Serialize};

use super::Flag;
use crate::identity::Identity;

/// Which navigation shell the app opens into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shell {
    /// Sign-in / sign-up stack.
    Auth,
    /// Main application stack.
    Main,
}

/// Outcome of evaluating the initial-screen decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    AppShell(Shell),
    Onboarding,
    /// Anonymous visitor with no sign-up on record: no screen is committed
    /// until a sign-up completion resolves the question.
    Undetermined,
}

/// Screen selection states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenState {
    Loading,
    Onboarding,
    AppShell(Shell),
}

/// Events that drive the screen flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A resolution pass finished (identity change or flag re-read).
    Resolved(Resolution),
    /// The user finished the first-run tutorial.
    OnboardingCompleted,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    /// Persist `onboardingCompleted = "true"`.
    PersistOnboardingCompleted,
}

/// Decision table from spec'd startup behavior:
///
/// | identity | onboarding | signed up | screen |
/// |---|---|---|---|
/// | present | `True` | — | main shell |
/// | present | `False`/`Unset` | — | onboarding |
/// | absent | — | `True` | auth shell, onboarding skipped |
/// | absent | — | `False`/`Unset` | undetermined |
///
/// Onboarding is only ever owed to a signed-in user who has not seen it; an
/// anonymous visitor who merely opened the app gets no commitment until a
/// sign-up completes.
pub fn resolve_initial_screen(
    identity: Option<&Identity>,
    onboarding: Flag,
    signed_up: Flag,
) -> Resolution {
    match identity {
        Some(_) => {
            if onboarding.is_true() {
                Resolution::AppShell(Shell::Main)
            } else {
                Resolution::Onboarding
            }
        }
        None => {
            if signed_up.is_true() {
                Resolution::AppShell(Shell::Auth)
            } else {
                Resolution::Undetermined
            }
        }
    }
}

/// Pure screen state machine.
///
/// `AppShell` variants are terminal within a session; nothing returns to
/// `Loading` once it has been left.
pub struct SessionStateMachine;

impl SessionStateMachine {
    pub fn transition(
        state: ScreenState,
        event: SessionEvent,
    ) -> (ScreenState, Vec<SessionAction>) {
        match (state, event) {
            (ScreenState::Loading, SessionEvent::Resolved(resolution)) => match resolution {
                Resolution::AppShell(shell) => (ScreenState::AppShell(shell), Vec::new()),
                Resolution::Onboarding => (ScreenState::Onboarding, Vec::new()),
                // Stay on loading until a sign-up completion re-resolves.
                Resolution::Undetermined => (ScreenState::Loading, Vec::new()),
            },
            (ScreenState::Onboarding, SessionEvent::OnboardingCompleted) => (
                ScreenState::AppShell(Shell::Main),
                vec![SessionAction::PersistOnboardingCompleted],
            ),
            // An identity change while onboarding is showing may withdraw it
            // (sign-out mid-tutorial drops to the auth shell).
            (ScreenState::Onboarding, SessionEvent::Resolved(Resolution::AppShell(shell))) => {
                (ScreenState::AppShell(shell), Vec::new())
            }
            (state, _event) => (state, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> Identity {
        Identity::new("uid-1", "guest@example.com")
    }

    #[test]
    fn signed_in_without_onboarding_gets_onboarding() {
        let resolution = resolve_initial_screen(Some(&user()), Flag::Unset, Flag::Unset);
        assert_eq!(resolution, Resolution::Onboarding);

        let resolution = resolve_initial_screen(Some(&user()), Flag::False, Flag::True);
        assert_eq!(resolution, Resolution::Onboarding);
    }

    #[test]
    fn signed_in_with_onboarding_done_gets_main_shell() {
        let resolution = resolve_initial_screen(Some(&user()), Flag::True, Flag::Unset);
        assert_eq!(resolution, Resolution::AppShell(Shell::Main));
    }

    #[test]
    fn anonymous_returning_user_gets_auth_shell() {
        let resolution = resolve_initial_screen(None, Flag::Unset, Flag::True);
        assert_eq!(resolution, Resolution::AppShell(Shell::Auth));
    }

    #[test]
    fn anonymous_fresh_device_is_undetermined() {
        assert_eq!(
            resolve_initial_screen(None, Flag::Unset, Flag::Unset),
            Resolution::Undetermined
        );
        assert_eq!(
            resolve_initial_screen(None, Flag::True, Flag::False),
            Resolution::Undetermined
        );
    }

    #[test]
    fn loading_commits_resolved_screens() {
        let (state, actions) = SessionStateMachine::transition(
            ScreenState::Loading,
            SessionEvent::Resolved(Resolution::AppShell(Shell::Main)),
        );
        assert_eq!(state, ScreenState::AppShell(Shell::Main));
        assert!(actions.is_empty());

        let (state, _) = SessionStateMachine::transition(
            ScreenState::Loading,
            SessionEvent::Resolved(Resolution::Onboarding),
        );
        assert_eq!(state, ScreenState::Onboarding);
    }

    #[test]
    fn undetermined_resolution_stays_on_loading() {
        let (state, actions) = SessionStateMachine::transition(
            ScreenState::Loading,
            SessionEvent::Resolved(Resolution::Undetermined),
        );
        assert_eq!(state, ScreenState::Loading);
        assert!(actions.is_empty());
    }

    #[test]
    fn onboarding_completion_persists_flag_and_enters_main_shell() {
        let (state, actions) = SessionStateMachine::transition(
            ScreenState::Onboarding,
            SessionEvent::OnboardingCompleted,
        );
        assert_eq!(state, ScreenState::AppShell(Shell::Main));
        assert_eq!(actions, vec![SessionAction::PersistOnboardingCompleted]);
    }

    #[test]
    fn app_shell_is_terminal() {
        for event in [
            SessionEvent::Resolved(Resolution::Onboarding),
            SessionEvent::Resolved(Resolution::Undetermined),
            SessionEvent::OnboardingCompleted,
        ] {
            let (state, actions) =
                SessionStateMachine::transition(ScreenState::AppShell(Shell::Main), event);
            assert_eq!(state, ScreenState::AppShell(Shell::Main));
            assert!(actions.is_empty());
        }
    }
}
