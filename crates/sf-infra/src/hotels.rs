//! Bundled hotel catalog
//!
//! The explore screen ships with a fixed inventory rather than calling a
//! listings service, so the catalog port is backed by a static table.

use async_trait::async_trait;

use sf_core::hotel::Hotel;
use sf_core::ports::{errors::CatalogError, HotelCatalogPort};

pub struct StaticHotelCatalog {
    hotels: Vec<Hotel>,
}

impl StaticHotelCatalog {
    pub fn new() -> Self {
        Self {
            hotels: bundled_hotels(),
        }
    }
}

impl Default for StaticHotelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HotelCatalogPort for StaticHotelCatalog {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, CatalogError> {
        Ok(self.hotels.clone())
    }

    async fn get_hotel(&self, id: &str) -> Result<Option<Hotel>, CatalogError> {
        Ok(self.hotels.iter().find(|h| h.id == id).cloned())
    }
}

fn hotel(
    id: &str,
    name: &str,
    location: &str,
    rating: f64,
    price_per_night: u32,
    image_url: &str,
) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        rating,
        price_per_night,
        image_url: image_url.to_string(),
        description: Hotel::DEFAULT_DESCRIPTION.to_string(),
    }
}

fn bundled_hotels() -> Vec<Hotel> {
    vec![
        hotel(
            "1",
            "Grand Plaza Hotel",
            "New York",
            4.5,
            250,
            "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=400",
        ),
        hotel(
            "2",
            "Seaside Resort",
            "Miami",
            4.2,
            180,
            "https://images.unsplash.com/photo-1582719508461-905c673771fd?w=400",
        ),
        hotel(
            "3",
            "Mountain View Lodge",
            "Aspen",
            4.8,
            320,
            "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?w=400",
        ),
        hotel(
            "4",
            "Urban Boutique Hotel",
            "San Francisco",
            4.3,
            220,
            "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=400",
        ),
        hotel(
            "5",
            "Desert Oasis Inn",
            "Phoenix",
            4.0,
            150,
            "https://images.unsplash.com/photo-1571003123894-1f0594d2b5d9?w=400",
        ),
        hotel(
            "6",
            "Historic Downtown Hotel",
            "Boston",
            4.6,
            280,
            "https://images.unsplash.com/photo-1590490360182-c33d57733427?w=400",
        ),
    ]
}
