//! Application layer - Use cases and orchestration
//!
//! Contains the forecast request model, the port definitions and the service
//! that runs a forecast from upstream fetch to output sinks.

pub mod error;
pub mod ports;
pub mod request;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use request::ForecastRequest;
pub use services::*;
