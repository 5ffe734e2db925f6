//! OpenWeatherMap forecast integration
//!
//! Client for the OpenWeatherMap 5 day / 3 hour forecast API
//! (<https://openweathermap.org/forecast5>). Responses are mapped onto the
//! domain `ForecastSample` model.

pub mod client;
mod error;
pub mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig};
pub use error::WeatherError;
pub use models::{ForecastResponse, parse_forecast};
