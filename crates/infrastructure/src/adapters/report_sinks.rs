//! File sinks - Implement ReportSinkPort on the local filesystem

use std::path::{Path, PathBuf};

use application::{error::ApplicationError, ports::ReportSinkPort};
use async_trait::async_trait;
use domain::ForecastReport;
use tokio::{fs, io::AsyncWriteExt};
use tracing::{debug, instrument};

async fn ensure_parent_dir(path: &Path) -> Result<(), ApplicationError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .await
            .map_err(|e| {
                ApplicationError::Output(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            }),
        _ => Ok(()),
    }
}

fn serialize(report: &ForecastReport, pretty: bool) -> Result<String, ApplicationError> {
    let encoded = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    encoded.map_err(|e| ApplicationError::Internal(format!("Failed to encode report: {e}")))
}

/// Appends every report as one compact JSON line
#[derive(Debug, Clone)]
pub struct JsonLinesDatasetSink {
    path: PathBuf,
}

impl JsonLinesDatasetSink {
    /// Create a sink for the given dataset file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Dataset file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReportSinkPort for JsonLinesDatasetSink {
    #[instrument(skip(self, report), fields(path = %self.path.display()))]
    async fn push(&self, report: &ForecastReport) -> Result<(), ApplicationError> {
        ensure_parent_dir(&self.path).await?;

        let mut line = serialize(report, false)?;
        line.push('\n');

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                ApplicationError::Output(format!("Failed to open {}: {e}", self.path.display()))
            })?;

        file.write_all(line.as_bytes()).await.map_err(|e| {
            ApplicationError::Output(format!("Failed to write {}: {e}", self.path.display()))
        })?;
        file.flush().await.map_err(|e| {
            ApplicationError::Output(format!("Failed to flush {}: {e}", self.path.display()))
        })?;

        debug!(bytes = line.len(), "Report appended to dataset");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "dataset"
    }
}

/// Writes the latest report as pretty JSON, replacing the file
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// Create a sink for the given output file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReportSinkPort for JsonFileSink {
    #[instrument(skip(self, report), fields(path = %self.path.display()))]
    async fn push(&self, report: &ForecastReport) -> Result<(), ApplicationError> {
        ensure_parent_dir(&self.path).await?;

        let mut contents = serialize(report, true)?;
        contents.push('\n');

        fs::write(&self.path, contents.as_bytes())
            .await
            .map_err(|e| {
                ApplicationError::Output(format!("Failed to write {}: {e}", self.path.display()))
            })?;

        debug!(bytes = contents.len(), "Report written");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use domain::{CityMetadata, GeoLocation, MeasurementSystem, ReportLocation};

    use super::*;

    fn report(data_points: u32) -> ForecastReport {
        let location = GeoLocation::new(35.6762, 139.6503).unwrap();
        let city = CityMetadata {
            name: Some("Tokyo".to_string()),
            country: Some("JP".to_string()),
            utc_offset_secs: Some(32_400),
        };
        ForecastReport::new(
            ReportLocation::new(&location, &city),
            MeasurementSystem::Metric,
            data_points,
            Vec::new(),
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn dataset_sink_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonLinesDatasetSink::new(dir.path().join("nested/data/forecasts.jsonl"));

        sink.push(&report(40)).await.unwrap();
        sink.push(&report(16)).await.unwrap();

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: ForecastReport = serde_json::from_str(lines[0]).unwrap();
        let second: ForecastReport = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first.data_points, 40);
        assert_eq!(second.data_points, 16);
        assert_eq!(first.location.city.as_deref(), Some("Tokyo"));
    }

    #[tokio::test]
    async fn dataset_lines_are_compact() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonLinesDatasetSink::new(dir.path().join("forecasts.jsonl"));

        sink.push(&report(40)).await.unwrap();

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(contents.matches('\n').count(), 1);
        assert!(contents.contains("\"dataPoints\":40"));
        assert!(contents.contains("\"retrievedAt\""));
    }

    #[tokio::test]
    async fn file_sink_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileSink::new(dir.path().join("out/report.json"));

        sink.push(&report(40)).await.unwrap();
        sink.push(&report(8)).await.unwrap();

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        let stored: ForecastReport = serde_json::from_str(&contents).unwrap();
        assert_eq!(stored.data_points, 8);
        assert!(contents.contains("\n  \"location\""));
    }

    #[tokio::test]
    async fn unwritable_path_is_an_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let sink = JsonLinesDatasetSink::new(blocker.join("forecasts.jsonl"));
        let err = sink.push(&report(1)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Output(_)));
    }

    #[test]
    fn sink_names() {
        assert_eq!(JsonLinesDatasetSink::new("a").name(), "dataset");
        assert_eq!(JsonFileSink::new("b").name(), "file");
    }
}
