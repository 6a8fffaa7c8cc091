//! Document collection clients for bookings and user profiles.

use async_trait::async_trait;

use sf_core::booking::Booking;
use sf_core::ports::{
    errors::BackendError, BookingRepositoryPort, UserRepositoryPort,
};
use sf_core::profile::UserProfile;

use super::status_error;

pub struct HttpBookingRepository {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBookingRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl BookingRepositoryPort for HttpBookingRepository {
    async fn create(&self, booking: &Booking) -> Result<(), BackendError> {
        let url = format!("{}/bookings", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(booking)
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Booking>, BackendError> {
        let url = format!("{}/bookings?userId={}", self.base_url, user_id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))
    }
}

pub struct HttpUserRepository {
    http: reqwest::Client,
    base_url: String,
}

impl HttpUserRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl UserRepositoryPort for HttpUserRepository {
    async fn get(&self, user_id: &str) -> Result<Option<UserProfile>, BackendError> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(status_error(status));
        }

        let profile = response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))?;
        Ok(Some(profile))
    }

    async fn update_display_name(&self, user_id: &str, name: &str) -> Result<(), BackendError> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let response = self
            .http
            .patch(&url)
            .json(&serde_json::json!({ "display_name": name }))
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }
        Ok(())
    }
}
