//! Bucketing of samples by UTC calendar day

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::entities::ForecastSample;

/// Samples that fall on one UTC calendar date, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket<'a> {
    date: NaiveDate,
    samples: Vec<&'a ForecastSample>,
}

impl<'a> DayBucket<'a> {
    /// Create a bucket from already collected samples
    #[must_use]
    pub const fn new(date: NaiveDate, samples: Vec<&'a ForecastSample>) -> Self {
        Self { date, samples }
    }

    /// The bucket key
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Samples of the day in chronological order
    #[must_use]
    pub fn samples(&self) -> &[&'a ForecastSample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Partition samples into per-day buckets keyed by their UTC date
///
/// Buckets are returned in ascending date order and are never empty. The
/// relative order of samples within a date is preserved.
#[must_use]
pub fn group_by_utc_date(samples: &[ForecastSample]) -> Vec<DayBucket<'_>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&ForecastSample>> = BTreeMap::new();

    for sample in samples {
        grouped.entry(sample.utc_date()).or_default().push(sample);
    }

    grouped
        .into_iter()
        .map(|(date, samples)| DayBucket::new(date, samples))
        .collect()
}
