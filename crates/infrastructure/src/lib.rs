//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the OpenWeatherMap client and
//! the local filesystem, and provides configuration, retry and logging.

pub mod adapters;
pub mod config;
pub mod retry;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, OpenWeatherAppConfig, OutputConfig};
pub use retry::{RetryConfig, RetryResult, Retryable, retry, with_retry};
pub use telemetry::{LoggingConfig, TelemetryError, init_logging};
