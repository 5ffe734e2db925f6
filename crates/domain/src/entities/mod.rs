//! Domain entities - Forecast inputs, daily summaries and the final report

mod daily_summary;
mod forecast_report;
mod forecast_sample;

pub use daily_summary::{
    ConditionSummary, DailySummary, FeelsLike, PrecipitationSummary, TemperatureSummary,
    WindSummary,
};
pub use forecast_report::{CityMetadata, ForecastReport, ReportLocation};
pub use forecast_sample::{ForecastSample, WeatherCondition};
