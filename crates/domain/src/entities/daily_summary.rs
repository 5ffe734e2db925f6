//! Daily forecast summary

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Temperature statistics for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    /// Display label of the requested unit system
    pub unit: String,
}

/// Perceived temperature at two points of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeelsLike {
    /// Reading of the representative sample
    pub day: i32,
    /// Reading of the last sample of the day
    pub night: i32,
}

/// Weather condition of the representative sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSummary {
    pub main: String,
    pub description: String,
}

/// Wind of the representative sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSummary {
    pub speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<u16>,
}

/// Precipitation outlook for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationSummary {
    /// Highest sample probability, as a percentage
    pub probability: u8,
    /// Accumulated volume, absent when nothing measurable is expected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

/// Condensed forecast for one UTC calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: NaiveDate,
    pub temperature: TemperatureSummary,
    pub feels_like: FeelsLike,
    pub humidity: u8,
    pub pressure: u32,
    pub cloud_cover: u8,
    pub condition: ConditionSummary,
    pub wind: WindSummary,
    pub precipitation: PrecipitationSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<u32>,
}

impl DailySummary {
    /// One-line human readable digest of the day
    #[must_use]
    pub fn headline(&self) -> String {
        format!(
            "{} {} ({}) {:.1}{unit}/{:.1}{unit}, precip {}%",
            self.date,
            self.condition.main,
            self.condition.description,
            self.temperature.min,
            self.temperature.max,
            self.precipitation.probability,
            unit = self.temperature.unit,
        )
    }
}
