//! Weather widget use cases.

mod hotel_weather;

pub use hotel_weather::GetHotelWeather;
