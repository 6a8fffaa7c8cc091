//! Explore-screen sort state.
//!
//! Tapping the active sort key flips the order; tapping the other key
//! switches to it and resets to descending.

use serde::{Deserialize, Serialize};

use super::Hotel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Rating,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn flipped(self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Current sort selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelSort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for HotelSort {
    /// Best-rated first, matching the explore screen's initial view.
    fn default() -> Self {
        Self {
            key: SortKey::Rating,
            order: SortOrder::Desc,
        }
    }
}

impl HotelSort {
    /// Apply a tap on a sort button.
    pub fn select(self, key: SortKey) -> HotelSort {
        if self.key == key {
            HotelSort {
                key,
                order: self.order.flipped(),
            }
        } else {
            HotelSort {
                key,
                order: SortOrder::Desc,
            }
        }
    }
}

/// Sort a hotel list for display. Stable, so equal keys keep catalog order.
pub fn sort_hotels(hotels: &mut [Hotel], sort: HotelSort) {
    match sort.key {
        SortKey::Price => hotels.sort_by_key(|h| h.price_per_night),
        // Ratings come from catalogs as finite star values; total_cmp keeps
        // the comparison total regardless.
        SortKey::Rating => hotels.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
    }
    if sort.order == SortOrder::Desc {
        hotels.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(id: &str, rating: f64, price: u32) -> Hotel {
        Hotel {
            id: id.to_string(),
            name: format!("Hotel {id}"),
            location: "Testville".to_string(),
            rating,
            price_per_night: price,
            image_url: String::new(),
            description: String::new(),
        }
    }

    fn ids(hotels: &[Hotel]) -> Vec<&str> {
        hotels.iter().map(|h| h.id.as_str()).collect()
    }

    #[test]
    fn default_sort_is_rating_descending() {
        let mut hotels = vec![hotel("a", 4.0, 100), hotel("b", 4.8, 300), hotel("c", 4.5, 200)];
        sort_hotels(&mut hotels, HotelSort::default());
        assert_eq!(ids(&hotels), ["b", "c", "a"]);
    }

    #[test]
    fn price_ascending_orders_cheapest_first() {
        let mut hotels = vec![hotel("a", 4.0, 250), hotel("b", 4.8, 150), hotel("c", 4.5, 320)];
        let sort = HotelSort {
            key: SortKey::Price,
            order: SortOrder::Asc,
        };
        sort_hotels(&mut hotels, sort);
        assert_eq!(ids(&hotels), ["b", "a", "c"]);
    }

    #[test]
    fn selecting_active_key_flips_order() {
        let sort = HotelSort::default();
        let flipped = sort.select(SortKey::Rating);
        assert_eq!(flipped.key, SortKey::Rating);
        assert_eq!(flipped.order, SortOrder::Asc);
        assert_eq!(flipped.select(SortKey::Rating).order, SortOrder::Desc);
    }

    #[test]
    fn selecting_new_key_resets_to_descending() {
        let sort = HotelSort {
            key: SortKey::Rating,
            order: SortOrder::Asc,
        };
        let switched = sort.select(SortKey::Price);
        assert_eq!(switched.key, SortKey::Price);
        assert_eq!(switched.order, SortOrder::Desc);
    }
}
