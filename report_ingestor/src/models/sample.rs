//! Canonical in-memory representation of the report's two time series.
//!
//! These structs are the standard output of the report parser, regardless of
//! which vendor tool generated the underlying HTML.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single battery-health observation.
///
/// Health is derived at parse time as
/// `100 * full_charge_capacity / design_capacity` for one capacity-history
/// row; rows with a zero design capacity never become samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSample {
    /// The end date of the capacity-history period this sample covers.
    pub date: NaiveDate,

    /// Battery health as a percentage of design capacity.
    pub health: f64,
}

/// A single on-battery usage observation.
///
/// Only rows in an active/connected-standby state with a real energy-drained
/// reading and a non-zero duration become samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSample {
    /// When the usage period started (naive local time, as reported).
    pub started_at: NaiveDateTime,

    /// Duration of the period in fractional hours. Always > 0.
    pub hours_used: f64,
}
