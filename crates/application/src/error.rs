//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request input rejected before any upstream call
    #[error("{0}")]
    Validation(String),

    /// External service error
    #[error("{0}")]
    ExternalService(String),

    /// Upstream rate limit exceeded
    #[error("{0}")]
    RateLimited(String),

    /// Upstream rejected the credentials
    #[error("{0}")]
    NotAuthorized(String),

    /// Upstream does not know the requested resource
    #[error("{0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Output sink failed
    #[error("Output error: {0}")]
    Output(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited(_) | Self::ExternalService(_))
    }

    /// Lift a domain error, keeping invariant violations apart from bad input
    #[must_use]
    pub fn from_domain(err: DomainError) -> Self {
        if err.is_invariant_violation() {
            Self::Internal(err.to_string())
        } else {
            Self::Domain(err)
        }
    }
}
