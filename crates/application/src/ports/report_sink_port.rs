//! Report sink port
//!
//! Destinations that persist finished forecast reports.

use async_trait::async_trait;
use domain::ForecastReport;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for report output
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReportSinkPort: Send + Sync {
    /// Persist one report
    async fn push(&self, report: &ForecastReport) -> Result<(), ApplicationError>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
