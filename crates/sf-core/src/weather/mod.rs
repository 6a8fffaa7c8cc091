//! Weather widget domain model.

use serde::{Deserialize, Serialize};

/// Current conditions at a hotel's location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub condition: WeatherCondition,
}

/// Coarse condition buckets for the detail-screen widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Map a WMO weather interpretation code to a display bucket.
    pub fn from_wmo_code(code: u32) -> WeatherCondition {
        match code {
            0..=1 => WeatherCondition::Clear,
            2..=3 => WeatherCondition::Cloudy,
            45 | 48 => WeatherCondition::Fog,
            51..=67 | 80..=82 => WeatherCondition::Rain,
            71..=77 | 85..=86 => WeatherCondition::Snow,
            95..=99 => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Unknown,
        }
    }
}
