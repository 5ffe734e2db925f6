//! Forecast service - Fetch, condense and store a forecast

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use domain::{ForecastReport, GeoLocation, MeasurementSystem, ReportLocation, summarize_forecast};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{ForecastPort, ReportSinkPort, UpstreamForecast},
    request::ForecastRequest,
};

/// Service that turns one upstream forecast into a daily report
pub struct ForecastService {
    forecast: Arc<dyn ForecastPort>,
    sinks: Vec<Arc<dyn ReportSinkPort>>,
}

impl fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastService")
            .field(
                "sinks",
                &self.sinks.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a new forecast service without output sinks
    pub fn new(forecast: Arc<dyn ForecastPort>) -> Self {
        Self {
            forecast,
            sinks: Vec::new(),
        }
    }

    /// Add an output sink; reports are pushed in registration order
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn ReportSinkPort>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Number of registered sinks
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Fetch, summarize and store a forecast
    ///
    /// # Errors
    ///
    /// Fails if the upstream fetch fails, the pipeline hits an internal
    /// invariant violation, or any sink rejects the report.
    #[instrument(skip(self, request), fields(location = %request.location(), units = %request.units()))]
    pub async fn run(&self, request: &ForecastRequest) -> Result<ForecastReport, ApplicationError> {
        let upstream = self
            .forecast
            .fetch_forecast(request.location(), request.units())
            .await?;
        debug!(
            samples = upstream.samples.len(),
            data_points = upstream.data_points,
            "Upstream forecast received"
        );

        let report = Self::summarize(upstream, request.location(), request.units())?;

        for sink in &self.sinks {
            sink.push(&report).await?;
            debug!(sink = sink.name(), "Report stored");
        }

        info!(
            city = report.location.city.as_deref().unwrap_or("unknown"),
            country = report.location.country.as_deref().unwrap_or("unknown"),
            days = report.days(),
            data_points = report.data_points,
            "Weather forecast retrieved"
        );

        Ok(report)
    }

    /// Summarize an already fetched forecast, stamped with the current time
    ///
    /// # Errors
    ///
    /// Fails only on an internal invariant violation of the pipeline.
    pub fn summarize(
        upstream: UpstreamForecast,
        location: &GeoLocation,
        units: MeasurementSystem,
    ) -> Result<ForecastReport, ApplicationError> {
        Self::summarize_at(upstream, location, units, Utc::now())
    }

    /// Summarize an already fetched forecast with an explicit timestamp
    ///
    /// # Errors
    ///
    /// See [`ForecastService::summarize`].
    pub fn summarize_at(
        upstream: UpstreamForecast,
        location: &GeoLocation,
        units: MeasurementSystem,
        retrieved_at: DateTime<Utc>,
    ) -> Result<ForecastReport, ApplicationError> {
        let daily = summarize_forecast(&upstream.samples, units)
            .map_err(ApplicationError::from_domain)?;

        Ok(ForecastReport::new(
            ReportLocation::new(location, &upstream.city),
            units,
            upstream.data_points,
            daily,
            retrieved_at,
        ))
    }
}
