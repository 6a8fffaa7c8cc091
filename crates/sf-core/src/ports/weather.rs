//! Weather service port.

use async_trait::async_trait;

use super::errors::WeatherError;
use crate::weather::WeatherReport;

#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Current conditions at a coordinate. Direct pass-through, no caching.
    async fn current(&self, latitude: f64, longitude: f64) -> Result<WeatherReport, WeatherError>;
}
