//! Command implementations

use std::sync::Arc;

use anyhow::{Context, Result};
use application::{ForecastRequest, ForecastService, UpstreamForecast};
use domain::{ForecastReport, GeoLocation, MeasurementSystem};
use infrastructure::{AppConfig, JsonFileSink, JsonLinesDatasetSink, OpenWeatherAdapter};
use secrecy::SecretString;
use tracing::{debug, info};

use crate::{ForecastArgs, SummarizeArgs};

/// Fetch, summarize, store and print a forecast
pub async fn forecast(args: ForecastArgs, config: &AppConfig) -> Result<()> {
    let api_key = args
        .api_key
        .map(SecretString::from)
        .or_else(|| config.openweather.api_key());

    let request = ForecastRequest::new(args.lat, args.lon, args.units.as_deref(), api_key)?;

    let adapter = OpenWeatherAdapter::new(
        config.openweather.weather_config(),
        request.api_key().clone(),
        config.retry.clone(),
    )?;

    let mut service = ForecastService::new(Arc::new(adapter));
    if let Some(path) = args.dataset.or_else(|| config.output.dataset_path.clone()) {
        debug!(path = %path.display(), "Dataset output enabled");
        service = service.with_sink(Arc::new(JsonLinesDatasetSink::new(path)));
    }
    if let Some(path) = args.output {
        debug!(path = %path.display(), "File output enabled");
        service = service.with_sink(Arc::new(JsonFileSink::new(path)));
    }

    let report = service.run(&request).await?;
    print_report(&report, config.output.pretty && !args.compact)
}

/// Summarize a saved upstream response without network access
pub async fn summarize(args: &SummarizeArgs, config: &AppConfig) -> Result<()> {
    let body = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let location = GeoLocation::new(args.lat, args.lon)?;
    let units = args
        .units
        .as_deref()
        .map(str::parse::<MeasurementSystem>)
        .transpose()?
        .unwrap_or_default();

    let response = integration_weather::parse_forecast(&body)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let report = ForecastService::summarize(
        UpstreamForecast {
            city: response.city,
            data_points: response.data_points,
            samples: response.samples,
        },
        &location,
        units,
    )?;

    info!(
        place = %report.place_label(),
        days = report.days(),
        "Saved forecast summarized"
    );

    print_report(&report, config.output.pretty && !args.compact)
}

fn print_report(report: &ForecastReport, pretty: bool) -> Result<()> {
    for day in &report.daily_forecast {
        debug!("{}", day.headline());
    }

    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
    .context("Failed to encode report")?;

    println!("{json}");
    Ok(())
}
