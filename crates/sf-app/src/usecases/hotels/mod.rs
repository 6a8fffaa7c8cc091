//! Hotel browsing use cases.

mod list_hotels;

pub use list_hotels::ListHotels;
