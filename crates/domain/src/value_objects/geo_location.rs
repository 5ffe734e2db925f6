//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A geographic point with validated latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoLocation {
    /// Minimum accepted latitude
    pub const MIN_LATITUDE: f64 = -90.0;
    /// Maximum accepted latitude
    pub const MAX_LATITUDE: f64 = 90.0;
    /// Minimum accepted longitude
    pub const MIN_LONGITUDE: f64 = -180.0;
    /// Maximum accepted longitude
    pub const MAX_LONGITUDE: f64 = 180.0;

    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidLatitude` or `InvalidLongitude` when a coordinate is
    /// not finite or falls outside its range. Latitude is checked first.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !(Self::MIN_LATITUDE..=Self::MAX_LATITUDE).contains(&latitude)
        {
            return Err(DomainError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite()
            || !(Self::MIN_LONGITUDE..=Self::MAX_LONGITUDE).contains(&longitude)
        {
            return Err(DomainError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
