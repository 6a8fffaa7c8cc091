//! Use case modules.

pub mod auth;
pub mod booking;
pub mod deals;
pub mod hotels;
pub mod onboarding;
pub mod profile;
pub mod session;
pub mod weather;
