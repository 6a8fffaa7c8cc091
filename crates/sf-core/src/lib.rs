//! # sf-core
//!
//! Core domain models and business logic for StayFinder.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod booking;
pub mod config;
pub mod deal;
pub mod hotel;
pub mod identity;
pub mod ports;
pub mod profile;
pub mod session;
pub mod weather;

// Re-export commonly used types at the crate root
pub use booking::{Booking, BookingError, BookingRequest};
pub use config::AppConfig;
pub use deal::Deal;
pub use hotel::{Hotel, HotelSort, SortKey, SortOrder};
pub use identity::Identity;
pub use profile::UserProfile;
pub use session::{Flag, Resolution, ScreenState, SessionAction, SessionEvent, Shell};
pub use weather::WeatherReport;
