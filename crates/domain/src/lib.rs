//! Domain layer for forecast-digest
//!
//! Contains the forecast entities, value objects and the pure pipeline that
//! condenses 3-hour forecast samples into daily summaries. Nothing in this
//! crate performs I/O.

pub mod entities;
pub mod errors;
pub mod forecast;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use forecast::{
    DayBucket, MAX_FORECAST_DAYS, group_by_utc_date, representative_index, round_to,
    summarize_day, summarize_forecast,
};
pub use value_objects::*;
