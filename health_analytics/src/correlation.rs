//! Pearson correlation between weekly degradation and weekly usage.

use std::fmt;

use thiserror::Error;

use crate::bucket::WeekKey;
use crate::rollup::Rollup;

#[derive(Debug, Error, PartialEq)]
pub enum CorrelationError {
    /// Fewer than two weeks appear in both rollups.
    #[error("Insufficient paired data for correlation analysis: {found} shared week(s), need 2")]
    InsufficientPairs { found: usize },

    /// One of the paired sequences is constant; the coefficient is undefined.
    #[error("Correlation is undefined when a paired series has zero variance")]
    ZeroVariance,
}

/// Fixed classification of the coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    StrongPositive,
    StrongNegative,
    WeakOrNone,
}

impl Strength {
    /// `r > 0.5` strong positive, `r < -0.5` strong negative, else weak/none.
    pub fn classify(r: f64) -> Self {
        if r > 0.5 {
            Strength::StrongPositive
        } else if r < -0.5 {
            Strength::StrongNegative
        } else {
            Strength::WeakOrNone
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::StrongPositive => "strong positive",
            Strength::StrongNegative => "strong negative",
            Strength::WeakOrNone => "weak or none",
        };
        write!(f, "{label}")
    }
}

/// Correlation over the weeks present in both rollups.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyCorrelation {
    pub coefficient: f64,
    pub paired_weeks: usize,
    pub strength: Strength,
}

/// Pair week keys present in both rollups and correlate the value sequences.
///
/// Pairing follows the degradation rollup's insertion order. Fewer than two
/// shared weeks is an explicit status, never a numeric result.
pub fn weekly_correlation(
    degradation: &Rollup<WeekKey>,
    usage: &Rollup<WeekKey>,
) -> Result<WeeklyCorrelation, CorrelationError> {
    let mut deg_values = Vec::new();
    let mut usage_values = Vec::new();
    for (week, total) in degradation.iter() {
        if usage.contains(week) {
            deg_values.push(total);
            usage_values.push(usage.get(week));
        }
    }

    if deg_values.len() < 2 {
        return Err(CorrelationError::InsufficientPairs {
            found: deg_values.len(),
        });
    }

    let coefficient = pearson(&deg_values, &usage_values)?;
    Ok(WeeklyCorrelation {
        coefficient,
        paired_weeks: deg_values.len(),
        strength: Strength::classify(coefficient),
    })
}

/// Pearson product-moment coefficient over two equal-length sequences.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Result<f64, CorrelationError> {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 {
        return Err(CorrelationError::ZeroVariance);
    }
    Ok(sxy / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(month: u32, week: u32) -> WeekKey {
        WeekKey {
            year: 2023,
            month,
            week,
        }
    }

    fn rollup(entries: &[(WeekKey, f64)]) -> Rollup<WeekKey> {
        let mut r = Rollup::default();
        for (k, v) in entries {
            r.add(*k, *v);
        }
        r
    }

    #[test]
    fn perfectly_linear_pairs_give_unit_coefficient() {
        let deg = rollup(&[(week(1, 1), 1.0), (week(1, 2), 2.0), (week(1, 3), 3.0)]);
        let usage = rollup(&[(week(1, 1), 2.0), (week(1, 2), 4.0), (week(1, 3), 6.0)]);
        let corr = weekly_correlation(&deg, &usage).unwrap();
        assert!((corr.coefficient - 1.0).abs() < 1e-12);
        assert_eq!(corr.paired_weeks, 3);
        assert_eq!(corr.strength, Strength::StrongPositive);
    }

    #[test]
    fn coefficient_is_symmetric_and_bounded() {
        let xs = [1.0, 3.0, 2.0, 5.0];
        let ys = [2.0, 1.0, 4.0, 3.0];
        let a = pearson(&xs, &ys).unwrap();
        let b = pearson(&ys, &xs).unwrap();
        assert!((a - b).abs() < 1e-12);
        assert!((-1.0..=1.0).contains(&a));
    }

    #[test]
    fn unshared_weeks_are_ignored() {
        let deg = rollup(&[
            (week(1, 1), 1.0),
            (week(1, 2), 2.0),
            (week(9, 1), 100.0), // no usage counterpart
        ]);
        let usage = rollup(&[(week(1, 1), 5.0), (week(1, 2), 1.0), (week(8, 1), 7.0)]);
        let corr = weekly_correlation(&deg, &usage).unwrap();
        assert_eq!(corr.paired_weeks, 2);
        assert_eq!(corr.strength, Strength::StrongNegative);
    }

    #[test]
    fn fewer_than_two_pairs_is_a_status_not_a_number() {
        let deg = rollup(&[(week(1, 1), 1.0)]);
        let usage = rollup(&[(week(1, 1), 5.0), (week(1, 2), 1.0)]);
        assert_eq!(
            weekly_correlation(&deg, &usage),
            Err(CorrelationError::InsufficientPairs { found: 1 })
        );
        let empty = Rollup::default();
        assert_eq!(
            weekly_correlation(&empty, &usage),
            Err(CorrelationError::InsufficientPairs { found: 0 })
        );
    }

    #[test]
    fn constant_series_is_undefined_not_nan() {
        let deg = rollup(&[(week(1, 1), 1.0), (week(1, 2), 1.0)]);
        let usage = rollup(&[(week(1, 1), 5.0), (week(1, 2), 3.0)]);
        assert_eq!(
            weekly_correlation(&deg, &usage),
            Err(CorrelationError::ZeroVariance)
        );
    }

    #[test]
    fn weak_classification_band() {
        assert_eq!(Strength::classify(0.5), Strength::WeakOrNone);
        assert_eq!(Strength::classify(-0.5), Strength::WeakOrNone);
        assert_eq!(Strength::classify(0.51), Strength::StrongPositive);
        assert_eq!(Strength::classify(-0.51), Strength::StrongNegative);
    }
}
