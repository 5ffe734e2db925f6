//! A single 3-hour forecast sample

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Categorical weather condition reported for a sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Provider condition code (e.g. 500 for light rain)
    pub code: u16,
    /// Condition group, e.g. "Rain"
    pub main: String,
    /// Condition detail, e.g. "light rain"
    pub description: String,
}

/// Forecast values for one 3-hour interval
///
/// Only the first weather entry reported by the provider is kept; the
/// ingestion layer refuses samples that carry none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Start of the interval (UTC)
    pub timestamp: DateTime<Utc>,
    /// Instantaneous temperature in the requested unit system
    pub temperature: f64,
    /// Perceived temperature in the requested unit system
    pub feels_like: f64,
    /// Relative humidity (0-100)
    pub humidity_percent: f64,
    /// Sea-level pressure in hPa
    pub pressure_hpa: f64,
    /// Authoritative weather condition
    pub condition: WeatherCondition,
    /// Cloud cover (0-100)
    pub cloud_cover_percent: f64,
    /// Wind speed in the requested unit system
    pub wind_speed: f64,
    /// Wind direction in meteorological degrees
    pub wind_direction_degrees: Option<u16>,
    /// Visibility in meters
    pub visibility_meters: Option<u32>,
    /// Probability of precipitation (0.0-1.0)
    pub precipitation_probability: f64,
    /// Rain volume over the interval in mm
    pub rain_volume_mm: Option<f64>,
    /// Snow volume over the interval in mm
    pub snow_volume_mm: Option<f64>,
}

impl ForecastSample {
    /// Calendar date of the sample in UTC
    #[must_use]
    pub fn utc_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Precipitation accumulated over the interval
    ///
    /// Rain and snow are added together when both are reported.
    #[must_use]
    pub fn precipitation_volume_mm(&self) -> f64 {
        self.rain_volume_mm.unwrap_or(0.0) + self.snow_volume_mm.unwrap_or(0.0)
    }
}
