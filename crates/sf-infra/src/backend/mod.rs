//! Backend service adapters
//!
//! The hosted backend exposes the auth endpoints and the document
//! collections (bookings, users) over one JSON API; these clients share
//! its base URL and error mapping.

mod auth;
mod documents;

pub use auth::HttpAuthGateway;
pub use documents::{HttpBookingRepository, HttpUserRepository};

use sf_core::ports::errors::BackendError;

fn status_error(status: reqwest::StatusCode) -> BackendError {
    if status == reqwest::StatusCode::FORBIDDEN {
        BackendError::PermissionDenied
    } else {
        BackendError::BadStatus(status.as_u16())
    }
}
