//! OpenWeatherMap forecast client
//!
//! HTTP client for the `/forecast` endpoint of the OpenWeatherMap API.

use std::time::Duration;

use async_trait::async_trait;
use domain::{GeoLocation, MeasurementSystem};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    error::WeatherError,
    models::{ApiResponse, ForecastResponse},
};

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of 3-hour samples to request (default: 40, five days)
    #[serde(default = "default_sample_count")]
    pub sample_count: u8,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_sample_count() -> u8 {
    40
}

fn default_user_agent() -> String {
    format!("forecast-digest/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            sample_count: default_sample_count(),
            user_agent: default_user_agent(),
        }
    }
}

/// Weather client trait for fetching forecasts
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the 3-hour forecast for a location
    async fn get_forecast(
        &self,
        location: &GeoLocation,
        units: MeasurementSystem,
    ) -> Result<ForecastResponse, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
    api_key: SecretString,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration and API key
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` for a blank key and `ConnectionFailed` if the
    /// HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig, api_key: SecretString) -> Result<Self, WeatherError> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// See [`OpenWeatherMapClient::new`].
    pub fn with_defaults(api_key: SecretString) -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default(), api_key)
    }

    /// The configuration in use
    #[must_use]
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    fn forecast_query(
        &self,
        location: &GeoLocation,
        units: MeasurementSystem,
    ) -> [(&'static str, String); 5] {
        [
            ("lat", location.latitude().to_string()),
            ("lon", location.longitude().to_string()),
            ("appid", self.api_key.expose_secret().to_string()),
            ("units", units.as_str().to_string()),
            ("cnt", self.config.sample_count.to_string()),
        ]
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self), fields(lat = %location.latitude(), lon = %location.longitude(), units = %units))]
    async fn get_forecast(
        &self,
        location: &GeoLocation,
        units: MeasurementSystem,
    ) -> Result<ForecastResponse, WeatherError> {
        let url = self.forecast_url();
        debug!(url = %url, samples = self.config.sample_count, "Fetching weather forecast");

        let response = self
            .client
            .get(&url)
            .query(&self.forecast_query(location, units))
            .send()
            .await
            .map_err(|e| WeatherError::from_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "Forecast request rejected");
            return Err(WeatherError::from_status(status));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let forecast = api_response.into_forecast()?;
        debug!(
            samples = forecast.samples.len(),
            data_points = forecast.data_points,
            "Forecast received"
        );

        Ok(forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SecretString {
        SecretString::from("test-key")
    }

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.sample_count, 40);
        assert!(config.user_agent.starts_with("forecast-digest/"));
    }

    #[test]
    fn test_client_creation() {
        assert!(OpenWeatherMapClient::with_defaults(key()).is_ok());
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let result = OpenWeatherMapClient::with_defaults(SecretString::from("   "));
        assert!(matches!(result, Err(WeatherError::MissingApiKey)));
    }

    #[test]
    fn test_forecast_url_trims_trailing_slash() {
        let config = WeatherConfig {
            base_url: "http://localhost:8080/data/2.5/".to_string(),
            ..Default::default()
        };
        let client = OpenWeatherMapClient::new(config, key()).expect("client");
        assert_eq!(client.forecast_url(), "http://localhost:8080/data/2.5/forecast");
    }

    #[test]
    fn test_forecast_query() {
        let client = OpenWeatherMapClient::with_defaults(key()).expect("client");
        let location = GeoLocation::new(52.52, 13.405).expect("valid");

        let query = client.forecast_query(&location, MeasurementSystem::Imperial);

        assert_eq!(query[0], ("lat", "52.52".to_string()));
        assert_eq!(query[1], ("lon", "13.405".to_string()));
        assert_eq!(query[2], ("appid", "test-key".to_string()));
        assert_eq!(query[3], ("units", "imperial".to_string()));
        assert_eq!(query[4], ("cnt", "40".to_string()));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = OpenWeatherMapClient::with_defaults(key()).expect("client");
        let debug = format!("{client:?}");
        assert!(!debug.contains("test-key"));
    }

    #[test]
    fn test_config_serialization() {
        let config = WeatherConfig {
            base_url: "https://custom.api.com".to_string(),
            timeout_secs: 30,
            sample_count: 16,
            user_agent: "custom".to_string(),
        };

        let json = serde_json::to_string(&config).expect("should serialize");
        let deserialized: WeatherConfig = serde_json::from_str(&json).expect("should deserialize");

        assert_eq!(deserialized.base_url, "https://custom.api.com");
        assert_eq!(deserialized.timeout_secs, 30);
        assert_eq!(deserialized.sample_count, 16);
    }

    #[test]
    fn test_config_partial_deserialization_uses_defaults() {
        let config: WeatherConfig =
            serde_json::from_str(r#"{"timeout_secs": 3}"#).expect("should deserialize");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.sample_count, 40);
    }
}
