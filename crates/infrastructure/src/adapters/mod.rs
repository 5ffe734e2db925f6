//! Adapters implementing application ports

mod openweather_adapter;
mod report_sinks;

pub use openweather_adapter::OpenWeatherAdapter;
pub use report_sinks::{JsonFileSink, JsonLinesDatasetSink};
