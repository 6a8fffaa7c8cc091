//! Hotel catalog port.

use async_trait::async_trait;

use super::errors::CatalogError;
use crate::hotel::Hotel;

#[async_trait]
pub trait HotelCatalogPort: Send + Sync {
    /// All hotels available on the explore screen, in catalog order.
    async fn list_hotels(&self) -> Result<Vec<Hotel>, CatalogError>;

    /// Look up a single hotel by id.
    async fn get_hotel(&self, id: &str) -> Result<Option<Hotel>, CatalogError>;
}
