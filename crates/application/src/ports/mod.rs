//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod forecast_port;
mod report_sink_port;

#[cfg(test)]
pub use forecast_port::MockForecastPort;
pub use forecast_port::{ForecastPort, UpstreamForecast};
#[cfg(test)]
pub use report_sink_port::MockReportSinkPort;
pub use report_sink_port::ReportSinkPort;
