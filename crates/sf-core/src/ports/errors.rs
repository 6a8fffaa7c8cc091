//! Typed errors shared by port contracts.
//!
//! Each port returns its own error kind so call sites can apply the one
//! fallback the operation calls for instead of nesting catch-alls.

/// Local key-value store failure.
///
/// Every variant is recoverable: the session bootstrap maps all of them to
/// a safe default and never surfaces them to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("store read failed: {0}")]
    ReadFailed(String),
    #[error("store write failed: {0}")]
    WriteFailed(String),
    #[error("store key removal failed: {0}")]
    RemoveFailed(String),
    #[error("store key enumeration failed: {0}")]
    ListFailed(String),
}

/// Authentication gateway failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("email already registered")]
    EmailTaken,
    #[error("auth service unreachable: {0}")]
    Unreachable(String),
    #[error("auth service error: {0}")]
    Service(String),
}

/// Deal catalog failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unreachable: {0}")]
    Unreachable(String),
    #[error("catalog returned status {0}")]
    BadStatus(u16),
    #[error("catalog response malformed: {0}")]
    Malformed(String),
}

/// Weather service failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeatherError {
    #[error("weather service unreachable: {0}")]
    Unreachable(String),
    #[error("weather service returned status {0}")]
    BadStatus(u16),
    #[error("weather response malformed: {0}")]
    Malformed(String),
}

/// Document backend failure (bookings, users).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend returned status {0}")]
    BadStatus(u16),
    #[error("backend response malformed: {0}")]
    Malformed(String),
    #[error("permission denied")]
    PermissionDenied,
}
