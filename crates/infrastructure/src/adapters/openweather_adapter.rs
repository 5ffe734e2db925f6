//! OpenWeatherMap adapter - Implements ForecastPort using integration_weather

use std::{fmt, sync::Arc};

use application::{
    error::ApplicationError,
    ports::{ForecastPort, UpstreamForecast},
};
use async_trait::async_trait;
use domain::{GeoLocation, MeasurementSystem};
use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
use secrecy::SecretString;
use tracing::{debug, instrument};

use crate::retry::{RetryConfig, retry};

/// Adapter for the OpenWeatherMap forecast API
pub struct OpenWeatherAdapter {
    client: Arc<dyn WeatherClient>,
    retry: RetryConfig,
}

impl fmt::Debug for OpenWeatherAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherAdapter")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherAdapter {
    /// Create an adapter backed by the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error for a blank API key or if the HTTP client fails to
    /// initialize.
    pub fn new(
        config: WeatherConfig,
        api_key: SecretString,
        retry: RetryConfig,
    ) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config, api_key).map_err(Self::map_error)?;
        Ok(Self::with_client(Arc::new(client), retry))
    }

    /// Create an adapter around any weather client
    #[must_use]
    pub fn with_client(client: Arc<dyn WeatherClient>, retry: RetryConfig) -> Self {
        Self { client, retry }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        let message = err.to_string();
        match err {
            WeatherError::MissingApiKey => ApplicationError::Validation(message),
            WeatherError::InvalidApiKey => ApplicationError::NotAuthorized(message),
            WeatherError::LocationNotFound => ApplicationError::NotFound(message),
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited(message),
            WeatherError::Api { .. }
            | WeatherError::NetworkUnreachable(_)
            | WeatherError::ParseError(_) => ApplicationError::ExternalService(message),
            WeatherError::ConnectionFailed(_) => ApplicationError::Configuration(message),
            WeatherError::RequestFailed(_) => ApplicationError::Internal(message),
        }
    }
}

#[async_trait]
impl ForecastPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_forecast(
        &self,
        location: &GeoLocation,
        units: MeasurementSystem,
    ) -> Result<UpstreamForecast, ApplicationError> {
        let client = self.client.as_ref();
        let response = retry(&self.retry, move || client.get_forecast(location, units))
            .await
            .map_err(Self::map_error)?;

        debug!(
            samples = response.samples.len(),
            city = response.city.name.as_deref().unwrap_or("unknown"),
            "Forecast fetched"
        );

        Ok(UpstreamForecast {
            city: response.city,
            data_points: response.data_points,
            samples: response.samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use domain::CityMetadata;
    use integration_weather::ForecastResponse;

    use super::*;

    /// Client that fails with a fixed error a number of times, then succeeds
    struct FlakyClient {
        failures: u32,
        error: fn() -> WeatherError,
        calls: AtomicU32,
    }

    impl FlakyClient {
        fn new(failures: u32, error: fn() -> WeatherError) -> Self {
            Self {
                failures,
                error,
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl WeatherClient for FlakyClient {
        async fn get_forecast(
            &self,
            _location: &GeoLocation,
            _units: MeasurementSystem,
        ) -> Result<ForecastResponse, WeatherError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err((self.error)());
            }
            Ok(ForecastResponse {
                city: CityMetadata {
                    name: Some("Oslo".to_string()),
                    country: Some("NO".to_string()),
                    utc_offset_secs: Some(3600),
                },
                data_points: 0,
                samples: Vec::new(),
            })
        }
    }

    fn fast_retry() -> RetryConfig {
        RetryConfig::new(1, 5, 2.0, 2).without_jitter()
    }

    fn oslo() -> GeoLocation {
        GeoLocation::new(59.91, 10.75).unwrap()
    }

    #[test]
    fn blank_key_is_a_validation_error() {
        let result = OpenWeatherAdapter::new(
            WeatherConfig::default(),
            SecretString::from(""),
            RetryConfig::default(),
        );
        assert!(matches!(result, Err(ApplicationError::Validation(_))));
    }

    #[test]
    fn adapter_creation() {
        let adapter = OpenWeatherAdapter::new(
            WeatherConfig::default(),
            SecretString::from("key"),
            RetryConfig::default(),
        );
        assert!(adapter.is_ok());
    }

    #[test]
    fn error_mapping_keeps_messages() {
        let err = OpenWeatherAdapter::map_error(WeatherError::LocationNotFound);
        assert!(matches!(err, ApplicationError::NotFound(_)));
        assert_eq!(
            err.to_string(),
            "Location not found. Please verify your coordinates are valid."
        );

        let err = OpenWeatherAdapter::map_error(WeatherError::InvalidApiKey);
        assert!(matches!(err, ApplicationError::NotAuthorized(_)));

        let err = OpenWeatherAdapter::map_error(WeatherError::RateLimitExceeded);
        assert!(matches!(err, ApplicationError::RateLimited(_)));

        let err = OpenWeatherAdapter::map_error(WeatherError::NetworkUnreachable("x".into()));
        assert!(err.to_string().starts_with("Network error"));
    }

    #[tokio::test]
    async fn retries_transient_errors() {
        let client = Arc::new(FlakyClient::new(2, || WeatherError::RateLimitExceeded));
        let adapter = OpenWeatherAdapter::with_client(client.clone(), fast_retry());

        let upstream = adapter
            .fetch_forecast(&oslo(), MeasurementSystem::Metric)
            .await
            .unwrap();

        assert_eq!(upstream.city.name.as_deref(), Some("Oslo"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn does_not_retry_invalid_key() {
        let client = Arc::new(FlakyClient::new(5, || WeatherError::InvalidApiKey));
        let adapter = OpenWeatherAdapter::with_client(client.clone(), fast_retry());

        let err = adapter
            .fetch_forecast(&oslo(), MeasurementSystem::Metric)
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotAuthorized(_)));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let client = Arc::new(FlakyClient::new(10, || WeatherError::Api {
            status: 502,
            reason: "Bad Gateway".to_string(),
        }));
        let adapter = OpenWeatherAdapter::with_client(client.clone(), fast_retry());

        let err = adapter
            .fetch_forecast(&oslo(), MeasurementSystem::Metric)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "OpenWeatherMap API error (502): Bad Gateway");
        assert_eq!(client.calls.load(Ordering::SeqCst), 3);
    }
}
