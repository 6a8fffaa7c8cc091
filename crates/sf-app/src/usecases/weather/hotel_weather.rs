//! Use case for the hotel-detail weather widget.

use std::sync::Arc;

use sf_core::ports::{errors::WeatherError, WeatherPort};
use sf_core::weather::WeatherReport;

pub struct GetHotelWeather {
    weather: Arc<dyn WeatherPort>,
}

impl GetHotelWeather {
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Current conditions at the hotel's coordinates. The widget hides
    /// itself on error, so failures just propagate.
    pub async fn execute(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReport, WeatherError> {
        self.weather.current(latitude, longitude).await
    }
}
