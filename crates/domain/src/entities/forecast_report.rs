//! Report wrapper around the daily summaries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DailySummary;
use crate::value_objects::{GeoLocation, MeasurementSystem};

/// Place metadata returned by the upstream provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityMetadata {
    pub name: Option<String>,
    pub country: Option<String>,
    /// Shift from UTC in seconds
    pub utc_offset_secs: Option<i32>,
}

/// Location block of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// UTC offset of the location in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<i32>,
}

impl ReportLocation {
    /// Combine the requested coordinates with upstream place metadata
    #[must_use]
    pub fn new(location: &GeoLocation, city: &CityMetadata) -> Self {
        Self {
            latitude: location.latitude(),
            longitude: location.longitude(),
            city: city.name.clone(),
            country: city.country.clone(),
            timezone: city.utc_offset_secs,
        }
    }
}

/// Complete forecast report as stored by the output sinks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub location: ReportLocation,
    pub units: MeasurementSystem,
    /// e.g. "5-day forecast"
    pub forecast_period: String,
    pub retrieved_at: DateTime<Utc>,
    /// Number of samples in the upstream response
    pub data_points: u32,
    pub daily_forecast: Vec<DailySummary>,
}

impl ForecastReport {
    /// Assemble a report from summaries and request metadata
    #[must_use]
    pub fn new(
        location: ReportLocation,
        units: MeasurementSystem,
        data_points: u32,
        daily_forecast: Vec<DailySummary>,
        retrieved_at: DateTime<Utc>,
    ) -> Self {
        Self {
            location,
            units,
            forecast_period: format!("{}-day forecast", daily_forecast.len()),
            retrieved_at,
            data_points,
            daily_forecast,
        }
    }

    /// Number of summarized days
    #[must_use]
    pub fn days(&self) -> usize {
        self.daily_forecast.len()
    }

    /// "City, Country" when known, otherwise the coordinates
    #[must_use]
    pub fn place_label(&self) -> String {
        match (&self.location.city, &self.location.country) {
            (Some(city), Some(country)) => format!("{city}, {country}"),
            (Some(city), None) => city.clone(),
            _ => format!(
                "{:.4}, {:.4}",
                self.location.latitude, self.location.longitude
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn berlin() -> CityMetadata {
        CityMetadata {
            name: Some("Berlin".to_string()),
            country: Some("DE".to_string()),
            utc_offset_secs: Some(3600),
        }
    }

    fn report(city: &CityMetadata) -> ForecastReport {
        let location = GeoLocation::new(52.52, 13.405).expect("valid");
        ForecastReport::new(
            ReportLocation::new(&location, city),
            MeasurementSystem::Metric,
            40,
            Vec::new(),
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn forecast_period_counts_days() {
        let report = report(&berlin());
        assert_eq!(report.forecast_period, "0-day forecast");
        assert_eq!(report.days(), 0);
    }

    #[test]
    fn serializes_wrapper_fields() {
        let json = serde_json::to_value(report(&berlin())).unwrap();
        assert_eq!(json["location"]["city"], "Berlin");
        assert_eq!(json["location"]["timezone"], 3600);
        assert_eq!(json["units"], "metric");
        assert_eq!(json["dataPoints"], 40);
        assert_eq!(json["forecastPeriod"], "0-day forecast");
        assert!(json["retrievedAt"].as_str().unwrap().starts_with("2024-01-15T12:00:00"));
        assert!(json["dailyForecast"].as_array().unwrap().is_empty());
    }

    #[test]
    fn unknown_city_is_omitted() {
        let json = serde_json::to_value(report(&CityMetadata::default())).unwrap();
        assert!(json["location"].get("city").is_none());
        assert!(json["location"].get("country").is_none());
        assert!(json["location"].get("timezone").is_none());
    }

    #[test]
    fn place_label_prefers_city() {
        assert_eq!(report(&berlin()).place_label(), "Berlin, DE");
        assert_eq!(
            report(&CityMetadata::default()).place_label(),
            "52.5200, 13.4050"
        );
    }
}
