//! OpenWeatherMap data models
//!
//! Raw response types of the `/forecast` endpoint and their mapping onto
//! the domain model.

use chrono::DateTime;
use domain::{CityMetadata, ForecastSample, WeatherCondition};
use serde::Deserialize;

use crate::error::WeatherError;

/// Forecast mapped onto the domain model
#[derive(Debug, Clone)]
pub struct ForecastResponse {
    /// Place metadata reported by the provider
    pub city: CityMetadata,
    /// Number of samples the provider says it returned (`cnt`)
    pub data_points: u32,
    /// Samples in provider order
    pub samples: Vec<ForecastSample>,
}

/// Parse a raw `/forecast` response body
///
/// # Errors
///
/// Returns `WeatherError::ParseError` if the body is not a valid forecast
/// document or a sample cannot be mapped.
pub fn parse_forecast(json: &str) -> Result<ForecastResponse, WeatherError> {
    let response: ApiResponse =
        serde_json::from_str(json).map_err(|e| WeatherError::ParseError(e.to_string()))?;
    response.into_forecast()
}

/// Main measurements of a sample
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMain {
    pub temp: f64,
    pub feels_like: f64,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
    pub pressure: f64,
    pub humidity: f64,
}

/// Weather condition entry
#[derive(Debug, Clone, Deserialize)]
pub struct ApiWeather {
    pub id: u16,
    pub main: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiClouds {
    pub all: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiWind {
    pub speed: f64,
    #[serde(default)]
    pub deg: Option<u16>,
    #[serde(default)]
    pub gust: Option<f64>,
}

/// Rain or snow volume block
#[derive(Debug, Clone, Deserialize)]
pub struct ApiVolume {
    #[serde(rename = "3h", default)]
    pub three_hours: Option<f64>,
}

/// One entry of the `list` array
#[derive(Debug, Clone, Deserialize)]
pub struct ApiForecastItem {
    pub dt: i64,
    pub main: ApiMain,
    pub weather: Vec<ApiWeather>,
    pub clouds: ApiClouds,
    pub wind: ApiWind,
    #[serde(default)]
    pub visibility: Option<u32>,
    #[serde(default)]
    pub pop: f64,
    #[serde(default)]
    pub rain: Option<ApiVolume>,
    #[serde(default)]
    pub snow: Option<ApiVolume>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCoord {
    pub lat: f64,
    pub lon: f64,
}

/// City block of the response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCity {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub coord: Option<ApiCoord>,
    #[serde(default)]
    pub country: Option<String>,
    /// Shift in seconds from UTC
    #[serde(default)]
    pub timezone: Option<i32>,
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
}

/// Raw API response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub cod: String,
    #[serde(default)]
    pub cnt: u32,
    pub list: Vec<ApiForecastItem>,
    #[serde(default)]
    pub city: Option<ApiCity>,
}

impl ApiForecastItem {
    /// Map the raw entry onto a domain sample
    ///
    /// # Errors
    ///
    /// Fails if `dt` is out of range or no weather entry is present.
    pub fn into_sample(self) -> Result<ForecastSample, WeatherError> {
        let timestamp = DateTime::from_timestamp(self.dt, 0)
            .ok_or_else(|| WeatherError::ParseError(format!("Invalid timestamp: {}", self.dt)))?;

        let weather = self.weather.into_iter().next().ok_or_else(|| {
            WeatherError::ParseError(format!("No weather condition for sample at {timestamp}"))
        })?;

        Ok(ForecastSample {
            timestamp,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity_percent: self.main.humidity,
            pressure_hpa: self.main.pressure,
            condition: WeatherCondition {
                code: weather.id,
                main: weather.main,
                description: weather.description,
            },
            cloud_cover_percent: self.clouds.all,
            wind_speed: self.wind.speed,
            wind_direction_degrees: self.wind.deg,
            visibility_meters: self.visibility,
            precipitation_probability: self.pop,
            rain_volume_mm: self.rain.and_then(|r| r.three_hours),
            snow_volume_mm: self.snow.and_then(|s| s.three_hours),
        })
    }
}

impl From<ApiCity> for CityMetadata {
    fn from(city: ApiCity) -> Self {
        Self {
            name: city.name,
            country: city.country,
            utc_offset_secs: city.timezone,
        }
    }
}

impl ApiResponse {
    /// Map the whole response onto the domain model
    ///
    /// # Errors
    ///
    /// Fails on the first sample that cannot be mapped.
    pub fn into_forecast(self) -> Result<ForecastResponse, WeatherError> {
        let samples = self
            .list
            .into_iter()
            .map(ApiForecastItem::into_sample)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ForecastResponse {
            city: self.city.map(CityMetadata::from).unwrap_or_default(),
            data_points: self.cnt,
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    const SAMPLE_BODY: &str = r#"{
        "cod": "200",
        "message": 0,
        "cnt": 2,
        "list": [
            {
                "dt": 1705320000,
                "main": {
                    "temp": 5.5, "feels_like": 2.1, "temp_min": 5.0, "temp_max": 6.0,
                    "pressure": 1013, "humidity": 75
                },
                "weather": [
                    {"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"},
                    {"id": 701, "main": "Mist", "description": "mist", "icon": "50d"}
                ],
                "clouds": {"all": 90},
                "wind": {"speed": 4.12, "deg": 230, "gust": 7.5},
                "visibility": 8000,
                "pop": 0.64,
                "rain": {"3h": 0.42}
            },
            {
                "dt": 1705330800,
                "main": {"temp": 3.0, "feels_like": 0.4, "pressure": 1014, "humidity": 80},
                "weather": [{"id": 600, "main": "Snow", "description": "light snow", "icon": "13n"}],
                "clouds": {"all": 100},
                "wind": {"speed": 2.0},
                "pop": 0.3,
                "snow": {"3h": 0.15}
            }
        ],
        "city": {
            "id": 2950159, "name": "Berlin", "coord": {"lat": 52.52, "lon": 13.405},
            "country": "DE", "timezone": 3600, "sunrise": 1705302000, "sunset": 1705331000
        }
    }"#;

    #[test]
    fn parses_samples_field_for_field() {
        let forecast = parse_forecast(SAMPLE_BODY).expect("should parse");
        assert_eq!(forecast.data_points, 2);
        assert_eq!(forecast.samples.len(), 2);

        let first = &forecast.samples[0];
        assert_eq!(
            first.timestamp,
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
        );
        assert!((first.temperature - 5.5).abs() < f64::EPSILON);
        assert!((first.feels_like - 2.1).abs() < f64::EPSILON);
        assert!((first.pressure_hpa - 1013.0).abs() < f64::EPSILON);
        assert!((first.humidity_percent - 75.0).abs() < f64::EPSILON);
        assert!((first.cloud_cover_percent - 90.0).abs() < f64::EPSILON);
        assert_eq!(first.wind_direction_degrees, Some(230));
        assert_eq!(first.visibility_meters, Some(8000));
        assert!((first.precipitation_probability - 0.64).abs() < f64::EPSILON);
        assert_eq!(first.rain_volume_mm, Some(0.42));
        assert_eq!(first.snow_volume_mm, None);
    }

    #[test]
    fn first_weather_entry_is_authoritative() {
        let forecast = parse_forecast(SAMPLE_BODY).expect("should parse");
        let condition = &forecast.samples[0].condition;
        assert_eq!(condition.code, 500);
        assert_eq!(condition.main, "Rain");
        assert_eq!(condition.description, "light rain");
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let forecast = parse_forecast(SAMPLE_BODY).expect("should parse");
        let second = &forecast.samples[1];
        assert_eq!(second.wind_direction_degrees, None);
        assert_eq!(second.visibility_meters, None);
        assert_eq!(second.rain_volume_mm, None);
        assert_eq!(second.snow_volume_mm, Some(0.15));
    }

    #[test]
    fn city_metadata_is_mapped() {
        let forecast = parse_forecast(SAMPLE_BODY).expect("should parse");
        assert_eq!(forecast.city.name.as_deref(), Some("Berlin"));
        assert_eq!(forecast.city.country.as_deref(), Some("DE"));
        assert_eq!(forecast.city.utc_offset_secs, Some(3600));
    }

    #[test]
    fn missing_city_defaults_to_unknown() {
        let forecast = parse_forecast(r#"{"cnt": 0, "list": []}"#).expect("should parse");
        assert_eq!(forecast.city, CityMetadata::default());
        assert!(forecast.samples.is_empty());
    }

    #[test]
    fn empty_weather_list_is_rejected() {
        let body = r#"{"cnt": 1, "list": [{
            "dt": 1705320000,
            "main": {"temp": 1.0, "feels_like": 0.0, "pressure": 1000, "humidity": 50},
            "weather": [],
            "clouds": {"all": 0},
            "wind": {"speed": 1.0},
            "pop": 0
        }]}"#;

        let err = parse_forecast(body).unwrap_err();
        assert!(matches!(err, WeatherError::ParseError(msg) if msg.contains("No weather condition")));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(matches!(
            parse_forecast("not json"),
            Err(WeatherError::ParseError(_))
        ));
        assert!(matches!(
            parse_forecast(r#"{"cnt": 1}"#),
            Err(WeatherError::ParseError(_))
        ));
    }
}
