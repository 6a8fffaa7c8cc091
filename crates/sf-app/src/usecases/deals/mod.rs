//! Deals screen use cases.

mod fetch_deals;

pub use fetch_deals::FetchDeals;
