//! Use case for fetching partner deals.

use std::sync::Arc;

use sf_core::deal::Deal;
use sf_core::ports::{errors::CatalogError, DealCatalogPort};

pub struct FetchDeals {
    catalog: Arc<dyn DealCatalogPort>,
    limit: u32,
}

impl FetchDeals {
    pub fn new(catalog: Arc<dyn DealCatalogPort>, limit: u32) -> Self {
        Self { catalog, limit }
    }

    /// Fetch deals for display.
    ///
    /// Errors propagate so the screen can show its retry affordance; there
    /// is no stale-deals cache to fall back on.
    pub async fn execute(&self) -> Result<Vec<Deal>, CatalogError> {
        match self.catalog.fetch_deals(self.limit).await {
            Ok(deals) => Ok(deals),
            Err(err) => {
                tracing::warn!(error = %err, "deal fetch failed");
                Err(err)
            }
        }
    }
}
