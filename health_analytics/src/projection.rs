//! Linear-trend projection of health toward a target threshold.

use chrono::{Duration, NaiveDate, NaiveTime};
use report_ingestor::models::sample::HealthSample;
use thiserror::Error;

const SECS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    /// The caller-supplied target lies outside the valid health range.
    #[error("Target health must be between 0 and 100, got {0}")]
    InvalidTarget(f64),
}

/// Outcome of a projection: a crossing date or an explicit terminal status.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// The fitted trend crosses the target on this date.
    Projected {
        date: NaiveDate,
        /// Fractional days from the latest sample to the crossing.
        days_from_latest: f64,
        /// Health percentage lost per day along the fitted trend.
        daily_loss: f64,
    },
    /// The trend declines but the latest sample is already at or below the
    /// target, so there is no future crossing to report.
    TargetAlreadyMet { latest_health: f64 },
    /// The fitted slope is flat or rising.
    NotDegrading,
    /// Fewer than two samples: no trend to fit.
    InsufficientData,
}

/// Fit `health = a + b * seconds_since_epoch` and extrapolate to `target`.
///
/// The target must lie in `[0, 100]`; out-of-range values are rejected
/// before any computation. Sample dates are taken at midnight UTC.
pub fn project_to_target(
    series: &[HealthSample],
    target: f64,
) -> Result<Projection, ProjectionError> {
    if !(0.0..=100.0).contains(&target) {
        return Err(ProjectionError::InvalidTarget(target));
    }
    let Some(latest) = series.last() else {
        return Ok(Projection::InsufficientData);
    };
    if series.len() < 2 {
        return Ok(Projection::InsufficientData);
    }

    let timestamps: Vec<f64> = series.iter().map(|s| epoch_seconds(s.date)).collect();
    let healths: Vec<f64> = series.iter().map(|s| s.health).collect();
    let slope = ols_slope(&timestamps, &healths);
    if slope >= 0.0 {
        return Ok(Projection::NotDegrading);
    }

    let daily_loss = -slope * SECS_PER_DAY;
    if latest.health <= target {
        return Ok(Projection::TargetAlreadyMet {
            latest_health: latest.health,
        });
    }

    let days_from_latest = (latest.health - target) / daily_loss;
    let midnight = latest.date.and_time(NaiveTime::MIN).and_utc();
    // saturate instead of panicking on absurdly flat trends
    let date = Duration::try_seconds((days_from_latest * SECS_PER_DAY).round() as i64)
        .and_then(|delta| midnight.checked_add_signed(delta))
        .map(|dt| dt.date_naive())
        .unwrap_or(NaiveDate::MAX);

    Ok(Projection::Projected {
        date,
        days_from_latest,
        daily_loss,
    })
}

fn epoch_seconds(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

/// Ordinary least-squares slope; 0 when the predictor has no spread.
fn ols_slope(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        sxy += dx * (y - mean_y);
        sxx += dx * dx;
    }
    if sxx == 0.0 { 0.0 } else { sxy / sxx }
}
