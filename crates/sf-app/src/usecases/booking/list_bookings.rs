//! Use case for the profile screen's booking history.

use std::sync::Arc;

use sf_core::booking::Booking;
use sf_core::ports::BookingRepositoryPort;

pub struct BookingHistory {
    bookings: Arc<dyn BookingRepositoryPort>,
}

impl BookingHistory {
    pub fn new(bookings: Arc<dyn BookingRepositoryPort>) -> Self {
        Self { bookings }
    }

    /// Bookings for a user, newest first.
    ///
    /// A fetch failure is non-critical for the profile screen: it is
    /// logged and rendered as an empty history.
    pub async fn execute(&self, user_id: &str) -> Vec<Booking> {
        match self.bookings.list_for_user(user_id).await {
            Ok(mut bookings) => {
                bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                bookings
            }
            Err(err) => {
                tracing::warn!(user_id, error = %err, "booking history fetch failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone, Utc};
    use sf_core::ports::errors::BackendError;

    struct StubRepo {
        response: Result<Vec<Booking>, BackendError>,
    }

    #[async_trait]
    impl BookingRepositoryPort for StubRepo {
        async fn create(&self, _booking: &Booking) -> Result<(), BackendError> {
            unimplemented!("not exercised")
        }

        async fn list_for_user(&self, _user_id: &str) -> Result<Vec<Booking>, BackendError> {
            self.response.clone()
        }
    }

    fn booking(id: &str, day: u32) -> Booking {
        Booking {
            id: id.to_string(),
            user_id: "uid-1".to_string(),
            hotel_name: "Seaside Resort".to_string(),
            location: "Miami, FL".to_string(),
            check_in: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2026, 9, 3).unwrap(),
            rooms: 1,
            total_cost: 360,
            created_at: Utc.with_ymd_and_hms(2026, 8, day, 10, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn orders_newest_first() {
        let history = BookingHistory::new(Arc::new(StubRepo {
            response: Ok(vec![booking("old", 1), booking("new", 20), booking("mid", 10)]),
        }));

        let bookings = history.execute("uid-1").await;
        let ids: Vec<_> = bookings.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn fetch_failure_yields_empty_history() {
        let history = BookingHistory::new(Arc::new(StubRepo {
            response: Err(BackendError::PermissionDenied),
        }));

        assert!(history.execute("uid-1").await.is_empty());
    }
}
