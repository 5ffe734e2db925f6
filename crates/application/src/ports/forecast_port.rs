//! Forecast provider port
//!
//! Defines the interface for retrieving raw 3-hour forecast samples.

use async_trait::async_trait;
use domain::{CityMetadata, ForecastSample, GeoLocation, MeasurementSystem};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A complete upstream response mapped onto domain types
#[derive(Debug, Clone, Default)]
pub struct UpstreamForecast {
    /// Place metadata reported by the provider
    pub city: CityMetadata,
    /// Sample count reported by the provider
    pub data_points: u32,
    /// Samples in non-decreasing timestamp order
    pub samples: Vec<ForecastSample>,
}

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch every 3-hour sample of one upstream response
    async fn fetch_forecast(
        &self,
        location: &GeoLocation,
        units: MeasurementSystem,
    ) -> Result<UpstreamForecast, ApplicationError>;
}
