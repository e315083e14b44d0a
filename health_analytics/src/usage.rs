//! Usage analytics: hours-on-battery rolled up by period.

use report_ingestor::models::sample::UsageSample;

use crate::rollup::PeriodTotals;

/// Rollups over the usage series, bucketed by each sample's calendar date
/// (time of day is ignored for bucketing).
#[derive(Debug, Clone, PartialEq)]
pub struct UsageAnalysis {
    pub totals: PeriodTotals,
}

impl UsageAnalysis {
    /// `None` when no usage samples exist — "no data", not zero.
    pub fn compute(samples: &[UsageSample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut totals = PeriodTotals::default();
        for sample in samples {
            totals.add(sample.started_at.date(), sample.hours_used);
        }
        Some(Self { totals })
    }

    pub fn for_year(&self, year: i32) -> f64 {
        self.totals.for_year(year)
    }

    pub fn for_month(&self, year: i32, month: u32) -> f64 {
        self.totals.for_month(year, month)
    }

    pub fn for_week(&self, year: i32, month: u32, week: u32) -> f64 {
        self.totals.for_week(year, month, week)
    }
}

/// Hour totals display as minutes under one hour, else as hours.
///
/// Part of the public contract: downstream comparisons test against these
/// exact strings.
pub fn format_hours(hours: f64) -> String {
    if hours < 1.0 {
        format!("{:.1} min", hours * 60.0)
    } else {
        format!("{hours:.2} hr")
    }
}
