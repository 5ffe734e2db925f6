//! Validated forecast request
//!
//! Carries the target location, measurement system and API key through the
//! application layer. Validation happens once, at construction.
//!
//! # Examples
//!
//! ```
//! use application::ForecastRequest;
//! use secrecy::SecretString;
//!
//! let request = ForecastRequest::new(
//!     52.52,
//!     13.405,
//!     Some("imperial"),
//!     Some(SecretString::from("my-key")),
//! )
//! .unwrap();
//!
//! assert_eq!(request.units().as_str(), "imperial");
//! assert!((request.location().latitude() - 52.52).abs() < f64::EPSILON);
//! ```

use std::fmt;

use domain::{GeoLocation, MeasurementSystem};
use secrecy::{ExposeSecret, SecretString};

use crate::error::ApplicationError;

/// Message shown when no usable API key was supplied
pub const MISSING_API_KEY: &str =
    "API key is required. Get a free key from https://openweathermap.org/api";

/// A forecast request whose inputs have been validated
#[derive(Clone)]
pub struct ForecastRequest {
    location: GeoLocation,
    units: MeasurementSystem,
    api_key: SecretString,
}

impl fmt::Debug for ForecastRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastRequest")
            .field("location", &self.location)
            .field("units", &self.units)
            .finish_non_exhaustive()
    }
}

impl ForecastRequest {
    /// Validate raw inputs
    ///
    /// Checks run in order: API key, coordinates, units. Absent units mean
    /// metric.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` for a missing or blank key and
    /// `ApplicationError::Domain` for bad coordinates or units.
    pub fn new(
        latitude: f64,
        longitude: f64,
        units: Option<&str>,
        api_key: Option<SecretString>,
    ) -> Result<Self, ApplicationError> {
        let api_key = api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| ApplicationError::Validation(MISSING_API_KEY.to_string()))?;

        let location = GeoLocation::new(latitude, longitude)?;
        let units = units
            .map(str::parse::<MeasurementSystem>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            location,
            units,
            api_key,
        })
    }

    /// Target location
    #[must_use]
    pub const fn location(&self) -> &GeoLocation {
        &self.location
    }

    /// Requested measurement system
    #[must_use]
    pub const fn units(&self) -> MeasurementSystem {
        self.units
    }

    /// Upstream API key
    #[must_use]
    pub const fn api_key(&self) -> &SecretString {
        &self.api_key
    }
}
