//! Partner deals surfaced from the public product catalog.

use serde::{Deserialize, Serialize};

/// Maximum deal title length before truncation.
pub const MAX_TITLE_LEN: usize = 40;

/// Location shown when the catalog entry has no category.
pub const FALLBACK_LOCATION: &str = "Special Offer";

/// Rating substituted when the catalog entry carries none.
pub const FALLBACK_RATING: f64 = 4.0;

/// Description substituted when the catalog entry carries none.
pub const FALLBACK_DESCRIPTION: &str = "Amazing deal!";

/// A partner deal, presented alongside hotels on the deals screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub price_per_night: u32,
    pub image_url: String,
    pub description: String,
}

impl Deal {
    /// Rating formatted to one decimal, as rendered on the card.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Truncate a catalog title for card display.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_LEN {
        let head: String = title.chars().take(MAX_TITLE_LEN).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

/// Derive a deal "location" from a catalog category.
pub fn location_from_category(category: Option<&str>) -> String {
    match category {
        Some(raw) if !raw.is_empty() => {
            let mut chars = raw.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => FALLBACK_LOCATION.to_string(),
            }
        }
        _ => FALLBACK_LOCATION.to_string(),
    }
}

/// Scale a catalog unit price to a nightly rate in whole dollars.
pub fn nightly_price(catalog_price: f64) -> u32 {
    (catalog_price * 10.0).round().max(0.0) as u32
}
