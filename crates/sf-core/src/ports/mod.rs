//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.

pub mod auth_gateway;
pub mod booking_repository;
mod clock;
pub mod deal_catalog;
pub mod errors;
pub mod hotel_catalog;
pub mod key_value_store;
pub mod user_repository;
pub mod weather;

pub use auth_gateway::{AuthGatewayPort, IdentityWatch};
pub use booking_repository::BookingRepositoryPort;
pub use clock::ClockPort;
pub use deal_catalog::DealCatalogPort;
pub use errors::{AuthError, BackendError, CatalogError, StoreError, WeatherError};
pub use hotel_catalog::HotelCatalogPort;
pub use key_value_store::KeyValueStorePort;
pub use user_repository::UserRepositoryPort;
pub use weather::WeatherPort;
