//! Booking repository port.

use async_trait::async_trait;

use super::errors::BackendError;
use crate::booking::Booking;

#[async_trait]
pub trait BookingRepositoryPort: Send + Sync {
    /// Persist a confirmed booking.
    async fn create(&self, booking: &Booking) -> Result<(), BackendError>;

    /// All bookings made by a user, in backend order.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Booking>, BackendError>;
}
