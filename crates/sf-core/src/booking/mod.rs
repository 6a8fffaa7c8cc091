//! Booking domain: stay validation, cost math, and the persisted record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Why a booking request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("check-in date cannot be in the past")]
    CheckInInPast,
    #[error("check-out date must be after check-in date")]
    CheckOutNotAfterCheckIn,
    #[error("at least one room is required")]
    NoRooms,
    #[error("booking requires a signed-in user")]
    NotAuthenticated,
}

/// A stay the user wants to book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub hotel_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rooms: u32,
}

impl BookingRequest {
    /// Validate against the caller-supplied current date.
    ///
    /// `today` is injected so validation stays pure; the application layer
    /// reads it from the clock port.
    pub fn validate(&self, today: NaiveDate) -> Result<(), BookingError> {
        if self.check_in < today {
            return Err(BookingError::CheckInInPast);
        }
        if self.check_out <= self.check_in {
            return Err(BookingError::CheckOutNotAfterCheckIn);
        }
        if self.rooms == 0 {
            return Err(BookingError::NoRooms);
        }
        Ok(())
    }

    /// Number of nights in the stay.
    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days().max(0) as u32
    }

    /// Total cost for the stay at the given nightly price.
    pub fn total_cost(&self, price_per_night: u32) -> u64 {
        u64::from(self.nights()) * u64::from(price_per_night) * u64::from(self.rooms)
    }
}

/// A confirmed booking as persisted in the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub hotel_name: String,
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rooms: u32,
    pub total_cost: u64,
    pub created_at: DateTime<Utc>,
}
