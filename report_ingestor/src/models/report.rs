//! The complete result of parsing one battery report.

use serde::{Deserialize, Serialize};

use crate::models::identity::BatteryIdentity;
use crate::models::sample::{HealthSample, UsageSample};

/// Everything extracted from one report, grouped into the three record sets.
///
/// A `ParsedReport` is produced wholesale on each parse and never mutated
/// afterwards; analytics take it as a plain input parameter. Sections that
/// were missing or malformed in the HTML are simply empty here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedReport {
    /// Attributes of the installed battery.
    pub identity: BatteryIdentity,
    /// Health samples, sorted ascending by date (duplicates retained).
    pub health_history: Vec<HealthSample>,
    /// Usage samples, sorted ascending by start timestamp.
    pub usage_history: Vec<UsageSample>,
}
