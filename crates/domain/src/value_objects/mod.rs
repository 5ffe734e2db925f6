//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod measurement_system;

pub use geo_location::GeoLocation;
pub use measurement_system::MeasurementSystem;
