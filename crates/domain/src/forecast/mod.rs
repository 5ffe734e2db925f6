//! Daily forecast pipeline
//!
//! Samples are bucketed by UTC calendar day ([`group_by_utc_date`]) and each
//! bucket is reduced to one [`DailySummary`] ([`summarize_day`]). Only the
//! first [`MAX_FORECAST_DAYS`] dates are summarized.
//!
//! Buckets use UTC day boundaries, not the local day of the location, so a
//! sample shortly after local midnight may land on the previous date.

mod aggregation;
mod grouping;
mod rounding;

pub use aggregation::{representative_index, summarize_day};
pub use grouping::{DayBucket, group_by_utc_date};
pub use rounding::round_to;

use crate::{
    entities::{DailySummary, ForecastSample},
    errors::DomainError,
    value_objects::MeasurementSystem,
};

/// Upper bound on the number of summarized days
pub const MAX_FORECAST_DAYS: usize = 7;

/// Group samples by UTC date and summarize the earliest days
///
/// # Errors
///
/// Returns `DomainError::InvariantViolation` if a bucket turns out empty,
/// which the grouping never produces.
pub fn summarize_forecast(
    samples: &[ForecastSample],
    units: MeasurementSystem,
) -> Result<Vec<DailySummary>, DomainError> {
    group_by_utc_date(samples)
        .iter()
        .take(MAX_FORECAST_DAYS)
        .map(|bucket| summarize_day(bucket, units))
        .collect()
}
