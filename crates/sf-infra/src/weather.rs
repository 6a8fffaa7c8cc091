//! Open-Meteo weather adapter.

use async_trait::async_trait;
use serde::Deserialize;

use sf_core::ports::{errors::WeatherError, WeatherPort};
use sf_core::weather::{WeatherCondition, WeatherReport};

pub struct OpenMeteoClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: u32,
}

impl OpenMeteoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl WeatherPort for OpenMeteoClient {
    async fn current(&self, latitude: f64, longitude: f64) -> Result<WeatherReport, WeatherError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true",
            self.base_url, latitude, longitude
        );
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::BadStatus(status.as_u16()));
        }

        let forecast: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Malformed(e.to_string()))?;

        Ok(WeatherReport {
            temperature_c: forecast.current_weather.temperature,
            wind_speed_kmh: forecast.current_weather.windspeed,
            condition: WeatherCondition::from_wmo_code(forecast.current_weather.weathercode),
        })
    }
}
