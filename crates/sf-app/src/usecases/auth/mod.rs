//! Authentication use cases.
//!
//! Thin wrappers over the auth gateway port plus the one piece of local
//! bookkeeping the session flow needs: a completed sign-up marks
//! `hasSignedUp` on this device.

mod sign_in;
mod sign_out;
mod sign_up;

pub use sign_in::SignIn;
pub use sign_out::SignOut;
pub use sign_up::SignUp;

/// Normalize a sign-in email: trimmed and lowercased.
pub(crate) fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
