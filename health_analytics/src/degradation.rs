//! Degradation analytics: per-day distribution of observed health drops,
//! period rollups, and the above-median interval insights.

use chrono::{Duration, NaiveDate};
use report_ingestor::models::sample::HealthSample;

use crate::rollup::PeriodTotals;

/// One day's share of an observed health drop.
///
/// Each gap between consecutive health samples is split uniformly across the
/// days of the gap; a pair sharing a date contributes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct DegradationSample {
    pub date: NaiveDate,
    /// Health percentage lost on this day (negative when health recovered).
    pub degradation: f64,
}

/// Rollups over the per-day degradation series.
///
/// Built with [`DegradationAnalysis::compute`]; absent entirely ("no data")
/// when the health series yields no per-day samples. Point queries on a
/// present analysis default to 0.0 for periods that observed no change.
#[derive(Debug, Clone, PartialEq)]
pub struct DegradationAnalysis {
    pub daily: Vec<DegradationSample>,
    pub totals: PeriodTotals,
}

impl DegradationAnalysis {
    /// Distribute and roll up the health series.
    ///
    /// `None` when fewer than two samples exist or every gap is zero days —
    /// callers must report "no data" rather than zero in that case.
    pub fn compute(series: &[HealthSample]) -> Option<Self> {
        let daily = distribute_daily(series);
        if daily.is_empty() {
            return None;
        }
        let mut totals = PeriodTotals::default();
        for sample in &daily {
            totals.add(sample.date, sample.degradation);
        }
        Some(Self { daily, totals })
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

/// Split each observed drop uniformly across the days of its gap.
///
/// A gap of `n` days emits `n` samples dated from the earlier sample's date
/// onward, each worth `(prev - next) / n`, so the per-gap sum reproduces the
/// observed drop exactly.
pub fn distribute_daily(series: &[HealthSample]) -> Vec<DegradationSample> {
    let mut daily = Vec::new();
    for pair in series.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let days = (next.date - prev.date).num_days();
        if days <= 0 {
            continue;
        }
        let per_day = (prev.health - next.health) / days as f64;
        for offset in 0..days {
            daily.push(DegradationSample {
                date: prev.date + Duration::days(offset),
                degradation: per_day,
            });
        }
    }
    daily
}

/// One health-sample interval, labeled by its end date.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalDrop {
    pub end_date: NaiveDate,
    /// Total health percentage lost over the interval.
    pub drop: f64,
}

/// Intervals degrading faster than the sample median.
///
/// The median is taken over the per-interval drops (one per consecutive
/// sample pair), not the per-day distributed values.
#[derive(Debug, Clone, PartialEq)]
pub struct DegradationInsights {
    pub median: f64,
    pub above_median: Vec<IntervalDrop>,
}

impl DegradationInsights {
    /// `None` when fewer than two samples exist.
    pub fn compute(series: &[HealthSample]) -> Option<Self> {
        if series.len() < 2 {
            return None;
        }
        let drops: Vec<IntervalDrop> = series
            .windows(2)
            .map(|pair| IntervalDrop {
                end_date: pair[1].date,
                drop: pair[0].health - pair[1].health,
            })
            .collect();
        let median = sample_median(drops.iter().map(|d| d.drop));
        let above_median = drops.iter().filter(|d| d.drop > median).cloned().collect();
        Some(Self {
            median,
            above_median,
        })
    }
}

fn sample_median(values: impl Iterator<Item = f64>) -> f64 {
    let mut sorted: Vec<f64> = values.collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(date: &str, health: f64) -> HealthSample {
        HealthSample {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            health,
        }
    }

    #[test]
    fn per_gap_sum_reproduces_the_observed_drop() {
        let series = [sample("2023-01-01", 100.0), sample("2023-02-01", 98.0)];
        let daily = distribute_daily(&series);
        assert_eq!(daily.len(), 31);
        let total: f64 = daily.iter().map(|d| d.degradation).sum();
        assert!((total - 2.0).abs() < 1e-9);
        assert_eq!(daily[0].date, sample("2023-01-01", 0.0).date);
        assert_eq!(daily[30].date, sample("2023-01-31", 0.0).date);
    }

    #[test]
    fn zero_day_gaps_emit_nothing() {
        let series = [sample("2023-01-01", 100.0), sample("2023-01-01", 98.0)];
        assert!(distribute_daily(&series).is_empty());
        assert!(DegradationAnalysis::compute(&series).is_none());
    }

    #[test]
    fn fewer_than_two_samples_is_no_data() {
        assert!(DegradationAnalysis::compute(&[]).is_none());
        assert!(DegradationAnalysis::compute(&[sample("2023-01-01", 100.0)]).is_none());
        assert!(DegradationInsights::compute(&[sample("2023-01-01", 100.0)]).is_none());
    }

    #[test]
    fn rollups_and_point_queries() {
        let series = [sample("2023-01-01", 100.0), sample("2023-02-01", 98.0)];
        let analysis = DegradationAnalysis::compute(&series).unwrap();
        assert!((analysis.for_year(2023) - 2.0).abs() < 1e-9);
        assert!((analysis.for_month(2023, 1) - 2.0).abs() < 1e-9);
        // a period with no observed change reads as zero
        assert_eq!(analysis.for_month(2023, 3), 0.0);
        // weekly buckets partition the month: their sums add back up
        let weekly_sum: f64 = analysis.totals.weekly.iter().map(|(_, v)| v).sum();
        assert!((weekly_sum - 2.0).abs() < 1e-9);
    }

    #[test]
    fn insights_report_intervals_above_the_median() {
        let series = [
            sample("2023-01-01", 100.0),
            sample("2023-02-01", 99.0), // drop 1.0
            sample("2023-03-01", 96.0), // drop 3.0
            sample("2023-04-01", 94.0), // drop 2.0
        ];
        let insights = DegradationInsights::compute(&series).unwrap();
        assert_eq!(insights.median, 2.0);
        assert_eq!(insights.above_median.len(), 1);
        assert_eq!(
            insights.above_median[0].end_date,
            sample("2023-03-01", 0.0).date
        );
        assert_eq!(insights.above_median[0].drop, 3.0);
    }

    #[test]
    fn even_interval_count_uses_the_midpoint_median() {
        let series = [
            sample("2023-01-01", 100.0),
            sample("2023-02-01", 99.0), // drop 1.0
            sample("2023-03-01", 96.0), // drop 3.0
        ];
        let insights = DegradationInsights::compute(&series).unwrap();
        assert_eq!(insights.median, 2.0);
        assert_eq!(insights.above_median.len(), 1);
    }
}
