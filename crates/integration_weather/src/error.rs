//! Weather client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while fetching a forecast
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key configured
    #[error("API key is required. Get a free key from https://openweathermap.org/api")]
    MissingApiKey,

    /// Upstream rejected the API key (HTTP 401)
    #[error(
        "Invalid API key. Please verify your key at https://openweathermap.org/api. \
         New keys may take 10-15 minutes to activate."
    )]
    InvalidApiKey,

    /// Upstream does not know the location (HTTP 404)
    #[error("Location not found. Please verify your coordinates are valid.")]
    LocationNotFound,

    /// Rate limit exceeded (HTTP 429)
    #[error("API rate limit exceeded. Please try again later or upgrade your API plan.")]
    RateLimitExceeded,

    /// Any other non-success status
    #[error("OpenWeatherMap API error ({status}): {reason}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase
        reason: String,
    },

    /// No response was received (connect failure or timeout)
    #[error(
        "Network error: Unable to reach OpenWeatherMap API. Please check your internet connection."
    )]
    NetworkUnreachable(String),

    /// The HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request could not be built
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl WeatherError {
    /// Map a non-success HTTP status to an error
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::InvalidApiKey,
            StatusCode::NOT_FOUND => Self::LocationNotFound,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimitExceeded,
            _ => Self::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            },
        }
    }

    /// Map a failure of `send()`
    #[must_use]
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_builder() {
            Self::RequestFailed(err.to_string())
        } else {
            Self::NetworkUnreachable(err.to_string())
        }
    }

    /// Returns true if the request may succeed when repeated
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimitExceeded | Self::NetworkUnreachable(_) => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
