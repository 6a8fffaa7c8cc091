//! Use case for confirming a booking.

use std::sync::Arc;

use uuid::Uuid;

use sf_core::booking::{Booking, BookingError, BookingRequest};
use sf_core::ports::{
    AuthGatewayPort, BookingRepositoryPort, ClockPort, HotelCatalogPort,
};

/// Validates a stay against today's date, prices it, and persists the
/// booking under the signed-in user.
pub struct CreateBooking {
    hotels: Arc<dyn HotelCatalogPort>,
    bookings: Arc<dyn BookingRepositoryPort>,
    auth: Arc<dyn AuthGatewayPort>,
    clock: Arc<dyn ClockPort>,
}

impl CreateBooking {
    pub fn new(
        hotels: Arc<dyn HotelCatalogPort>,
        bookings: Arc<dyn BookingRepositoryPort>,
        auth: Arc<dyn AuthGatewayPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            hotels,
            bookings,
            auth,
            clock,
        }
    }

    pub async fn execute(&self, request: BookingRequest) -> anyhow::Result<Booking> {
        // Booking is gated on a signed-in user, as on the detail screen.
        let identity = self
            .auth
            .current_identity()
            .await
            .ok_or(BookingError::NotAuthenticated)?;

        request.validate(self.clock.today())?;

        let hotel = self
            .hotels
            .get_hotel(&request.hotel_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("unknown hotel: {}", request.hotel_id))?;

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            user_id: identity.user_id,
            hotel_name: hotel.name,
            location: hotel.location,
            check_in: request.check_in,
            check_out: request.check_out,
            rooms: request.rooms,
            total_cost: request.total_cost(hotel.price_per_night),
            created_at: self.clock.now(),
        };

        self.bookings.create(&booking).await?;
        tracing::info!(booking_id = %booking.id, hotel = %booking.hotel_name, "booking confirmed");
        Ok(booking)
    }
}
