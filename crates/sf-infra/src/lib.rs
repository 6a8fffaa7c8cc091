//! # sf-infra
//!
//! Infrastructure adapters for StayFinder: the file-backed local store,
//! HTTP clients for the catalog/weather/backend services, and the system
//! clock. Each adapter implements a port from `sf-core`.

pub mod backend;
pub mod clock;
pub mod deals;
pub mod hotels;
pub mod kv;
pub mod weather;

pub use backend::{HttpAuthGateway, HttpBookingRepository, HttpUserRepository};
pub use clock::SystemClock;
pub use deals::ProductCatalogClient;
pub use hotels::StaticHotelCatalog;
pub use kv::{FileKeyValueStore, MemoryKeyValueStore};
pub use weather::OpenMeteoClient;
