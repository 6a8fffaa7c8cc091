//! Deal catalog port
//!
//! The deals screen is fed by a public product-catalog API used as a
//! stand-in for partner deals; the adapter owns the product-to-deal
//! mapping so this contract stays in domain terms.

use async_trait::async_trait;

use super::errors::CatalogError;
use crate::deal::Deal;

#[async_trait]
pub trait DealCatalogPort: Send + Sync {
    async fn fetch_deals(&self, limit: u32) -> Result<Vec<Deal>, CatalogError>;
}
