//! Booking use cases.

mod create_booking;
mod list_bookings;

pub use create_booking::CreateBooking;
pub use list_bookings::BookingHistory;
