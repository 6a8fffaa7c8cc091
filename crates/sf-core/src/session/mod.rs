//! Session bootstrap domain
//!
//! Models the persisted-flag lifecycle that gates onboarding and decides
//! whether the app shell opens on the auth stack or the main stack. The
//! local key-value store is the only persisted state owned here; identity
//! and booking data live behind their own ports.

mod flag;
mod screen;

pub use flag::Flag;
pub use screen::{
    resolve_initial_screen, Resolution, ScreenState, SessionAction, SessionEvent,
    SessionStateMachine, Shell,
};

/// Schema marker key for the local store.
pub const STORAGE_VERSION_KEY: &str = "storage_version";

/// Tri-state flag key: has the first-run tutorial been shown.
pub const ONBOARDING_COMPLETED_KEY: &str = "onboardingCompleted";

/// Tri-state flag key: has this device ever completed sign-up.
pub const HAS_SIGNED_UP_KEY: &str = "hasSignedUp";

/// Local-store schema version this build expects.
///
/// A stored marker that differs (or cannot be read) triggers a full wipe of
/// the local store on next launch.
pub const CURRENT_STORAGE_VERSION: &str = "1.0.1";

/// The fixed keys removed one by one when a bulk wipe fails.
pub const KNOWN_FLAG_KEYS: [&str; 2] = [ONBOARDING_COMPLETED_KEY, HAS_SIGNED_UP_KEY];
