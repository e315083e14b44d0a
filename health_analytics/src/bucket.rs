//! bucket.rs — calendar bucket mapping utilities
//!
//! - Rollup keys: year, calendar month, month-relative week.
//! - Week-of-month: anchored on the first Monday at or after the 2nd of the
//!   month ("days to Monday" is computed in 1..=7, never 0), so these are
//!   month-relative indices, not ISO week numbers.
//! - `week_range` reproduces the display labels for a given week index,
//!   clamped to the last calendar day of the month.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};

/// Yearly rollup key. Displays as `2023`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearKey(pub i32);

/// Monthly rollup key. Displays as `2023-01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

/// Month-relative weekly rollup key. Displays as `2023-01-W2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekKey {
    pub year: i32,
    pub month: u32,
    pub week: u32,
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-W{}", self.year, self.month, self.week)
    }
}

/// Days from the 1st of the month forward to the next Monday, in 1..=7.
///
/// 7 when the 1st is itself a Monday.
fn days_to_first_monday(first: NaiveDate) -> i64 {
    let offset = (7 - first.weekday().num_days_from_monday() as i64) % 7;
    if offset == 0 { 7 } else { offset }
}

/// Month-relative week index for a date: `((d - 1) + toMonday) / 7 + 1`.
///
/// Total and monotonically non-decreasing over the days of a month; always
/// >= 1. The index is deliberately the vendor report's own convention.
pub fn week_of_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).expect("day 1 is valid for every month");
    let to_monday = days_to_first_monday(first);
    (((date.day() as i64 - 1) + to_monday) / 7 + 1) as u32
}

/// All three bucket keys for a date.
pub fn bucket(date: NaiveDate) -> (YearKey, MonthKey, WeekKey) {
    let year = date.year();
    let month = date.month();
    (
        YearKey(year),
        MonthKey { year, month },
        WeekKey {
            year,
            month,
            week: week_of_month(date),
        },
    )
}

/// Display range for a week index within a month, clamped to the month end.
///
/// Returns `None` for week 0, an invalid month, or a week whose start falls
/// past the end of the month.
pub fn week_range(year: i32, month: u32, week: u32) -> Option<(NaiveDate, NaiveDate)> {
    if week == 0 {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let to_monday = days_to_first_monday(first);
    let start = first + Duration::days(to_monday * (week as i64 - 1));
    if start.month() != month || start.year() != year {
        return None;
    }
    let last = last_day_of_month(year, month)?;
    let end = start + Duration::days(6);
    Some((start, end.min(last)))
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).map(|d| d - Duration::days(1))
}
