//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Only the values the application layer actually consumes; service
/// credentials and UI preferences stay with their owners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Expected local-store schema version.
    ///
    /// Bumping this forces a one-time full local-store wipe on next launch.
    pub expected_storage_version: String,

    /// Deal catalog service base URL
    pub catalog_base_url: String,

    /// Weather service base URL
    pub weather_base_url: String,

    /// Document backend base URL (bookings, users, auth)
    pub backend_base_url: String,

    /// Number of deals requested per fetch
    pub deals_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            expected_storage_version: crate::session::CURRENT_STORAGE_VERSION.to_string(),
            catalog_base_url: "https://fakestoreapi.com".to_string(),
            weather_base_url: "https://api.open-meteo.com".to_string(),
            backend_base_url: "https://stayfinder-backend.example.com".to_string(),
            deals_limit: 10,
        }
    }
}
