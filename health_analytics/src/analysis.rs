//! One-stop analysis over a parsed report.
//!
//! [`ReportAnalysis`] is the explicit, immutable bundle the display layer
//! consumes: it computes every rollup once per parsed report and exposes the
//! correlation and projection as pure methods. Nothing here reads ambient
//! state; reparse the report and rebuild to refresh.

use report_ingestor::models::report::ParsedReport;
use tracing::debug;

use crate::correlation::{self, CorrelationError, WeeklyCorrelation};
use crate::degradation::{DegradationAnalysis, DegradationInsights};
use crate::projection::{self, Projection, ProjectionError};
use crate::usage::UsageAnalysis;

/// Derived statistics over one parsed report.
pub struct ReportAnalysis<'a> {
    report: &'a ParsedReport,
    /// `None` when the health series yields no per-day degradation.
    pub degradation: Option<DegradationAnalysis>,
    /// `None` when the report has no usage samples.
    pub usage: Option<UsageAnalysis>,
    /// `None` when fewer than two health samples exist.
    pub insights: Option<DegradationInsights>,
}

impl<'a> ReportAnalysis<'a> {
    pub fn of(report: &'a ParsedReport) -> Self {
        debug!("health history: {} entries", report.health_history.len());
        if let (Some(first), Some(last)) =
            (report.health_history.first(), report.health_history.last())
        {
            debug!("health data range: {} to {}", first.date, last.date);
            debug!(
                "health range: {:.2}% to {:.2}%",
                first.health, last.health
            );
        }
        debug!("usage history: {} entries", report.usage_history.len());

        Self {
            report,
            degradation: DegradationAnalysis::compute(&report.health_history),
            usage: UsageAnalysis::compute(&report.usage_history),
            insights: DegradationInsights::compute(&report.health_history),
        }
    }

    pub fn report(&self) -> &ParsedReport {
        self.report
    }

    /// Pearson correlation between the weekly degradation and usage rollups.
    pub fn correlation(&self) -> Result<WeeklyCorrelation, CorrelationError> {
        match (&self.degradation, &self.usage) {
            (Some(deg), Some(usage)) => {
                correlation::weekly_correlation(&deg.totals.weekly, &usage.totals.weekly)
            }
            _ => Err(CorrelationError::InsufficientPairs { found: 0 }),
        }
    }

    /// Project the health trend to a target percentage.
    pub fn project(&self, target: f64) -> Result<Projection, ProjectionError> {
        projection::project_to_target(&self.report.health_history, target)
    }
}
