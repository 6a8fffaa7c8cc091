//! Hotel domain models and client-side sorting.

mod sort;

pub use sort::{sort_hotels, HotelSort, SortKey, SortOrder};

use serde::{Deserialize, Serialize};

/// A bookable hotel as shown on the explore screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Star rating, 0.0..=5.0
    pub rating: f64,
    /// Nightly price in whole dollars
    pub price_per_night: u32,
    pub image_url: String,
    pub description: String,
}

impl Hotel {
    /// Fallback copy used when a listing arrives without a description.
    pub const DEFAULT_DESCRIPTION: &'static str =
        "A wonderful hotel offering comfortable stays and excellent amenities. \
         Enjoy your stay with us!";
}
