//! Use case for the explore screen's hotel list.

use std::sync::Arc;

use sf_core::hotel::{sort_hotels, Hotel, HotelSort};
use sf_core::ports::{errors::CatalogError, HotelCatalogPort};

pub struct ListHotels {
    catalog: Arc<dyn HotelCatalogPort>,
}

impl ListHotels {
    pub fn new(catalog: Arc<dyn HotelCatalogPort>) -> Self {
        Self { catalog }
    }

    /// Fetch the catalog and apply the current sort selection.
    pub async fn execute(&self, sort: HotelSort) -> Result<Vec<Hotel>, CatalogError> {
        let mut hotels = self.catalog.list_hotels().await?;
        sort_hotels(&mut hotels, sort);
        Ok(hotels)
    }
}
