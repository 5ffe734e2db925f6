//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Latitude is not a finite number in [-90, 90]
    #[error("Invalid latitude: {0}. Must be a number between -90 and 90.")]
    InvalidLatitude(f64),

    /// Longitude is not a finite number in [-180, 180]
    #[error("Invalid longitude: {0}. Must be a number between -180 and 180.")]
    InvalidLongitude(f64),

    /// Unsupported measurement system
    #[error("Units must be either \"metric\" or \"imperial\".")]
    InvalidMeasurementSystem(String),

    /// A programming contract inside the forecast pipeline was broken
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    /// Create an invariant violation error
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Returns true for contract failures, as opposed to bad user input
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}
