//! Reduction of one day bucket into a daily summary

use super::{grouping::DayBucket, rounding::round_to};
use crate::{
    entities::{
        ConditionSummary, DailySummary, FeelsLike, ForecastSample, PrecipitationSummary,
        TemperatureSummary, WindSummary,
    },
    errors::DomainError,
    value_objects::MeasurementSystem,
};

/// Index of the sample that stands for the whole day
///
/// For a full day of eight 3-hour samples this is the 12:00 UTC slot.
#[must_use]
pub const fn representative_index(len: usize) -> usize {
    len / 2
}

/// Summarize the samples of one day
///
/// Condition, wind, visibility and the day feels-like reading come from the
/// representative sample; they are point readings and never averaged.
///
/// # Errors
///
/// Returns `DomainError::InvariantViolation` for an empty bucket.
pub fn summarize_day(
    bucket: &DayBucket<'_>,
    units: MeasurementSystem,
) -> Result<DailySummary, DomainError> {
    let samples = bucket.samples();

    let Some(last) = samples.last() else {
        return Err(DomainError::invariant(format!(
            "empty bucket for {}",
            bucket.date()
        )));
    };
    let representative = samples
        .get(representative_index(samples.len()))
        .ok_or_else(|| {
            DomainError::invariant(format!(
                "representative index out of range for {}",
                bucket.date()
            ))
        })?;

    let total_precipitation: f64 = samples.iter().map(|s| s.precipitation_volume_mm()).sum();
    let max_probability = samples
        .iter()
        .map(|s| s.precipitation_probability)
        .fold(f64::NEG_INFINITY, f64::max);

    Ok(DailySummary {
        date: bucket.date(),
        temperature: temperature_summary(samples, units),
        feels_like: FeelsLike {
            day: to_whole(representative.feels_like),
            night: to_whole(last.feels_like),
        },
        humidity: to_percent(mean(samples, |s| s.humidity_percent)),
        pressure: to_hpa(mean(samples, |s| s.pressure_hpa)),
        cloud_cover: to_percent(mean(samples, |s| s.cloud_cover_percent)),
        condition: ConditionSummary {
            main: representative.condition.main.clone(),
            description: representative.condition.description.clone(),
        },
        wind: WindSummary {
            speed: round_to(representative.wind_speed, 1),
            direction: representative.wind_direction_degrees,
        },
        precipitation: PrecipitationSummary {
            probability: to_percent(max_probability * 100.0),
            amount: (total_precipitation > 0.0).then(|| round_to(total_precipitation, 1)),
        },
        visibility: representative.visibility_meters,
    })
}

fn temperature_summary(
    samples: &[&ForecastSample],
    units: MeasurementSystem,
) -> TemperatureSummary {
    let (min, max) = samples.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), s| (min.min(s.temperature), max.max(s.temperature)),
    );
    // float summation may drift a few ulps past the extremes
    let average = mean(samples, |s| s.temperature).clamp(min, max);

    TemperatureSummary {
        min: round_to(min, 1),
        max: round_to(max, 1),
        average: round_to(average, 1),
        unit: units.temperature_unit().to_string(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(samples: &[&ForecastSample], value: impl Fn(&ForecastSample) -> f64) -> f64 {
    samples.iter().map(|&s| value(s)).sum::<f64>() / samples.len() as f64
}

#[allow(clippy::cast_possible_truncation)]
fn to_whole(value: f64) -> i32 {
    round_to(value, 0) as i32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(value: f64) -> u8 {
    round_to(value, 0).clamp(0.0, 100.0) as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_hpa(value: f64) -> u32 {
    round_to(value, 0).max(0.0) as u32
}
