//! "Battery usage" section: time spent on battery per period.

use chrono::NaiveDateTime;
use scraper::Html;

use crate::models::sample::UsageSample;
use crate::parser::table::{cell_texts, rows, table_after_heading};

const HEADING: &str = "Battery usage";

/// Rows in any other state describe AC or suspended periods and are skipped.
const ACTIVE_STATES: [&str; 2] = ["Active", "Connected standby"];

/// Energy-drained cell value meaning "no reading for this period".
const NO_DATA: &str = "-";

/// Parse the usage table into usage samples, sorted by start timestamp.
pub(crate) fn parse_usage_history(doc: &Html) -> Vec<UsageSample> {
    let Some(table) = table_after_heading(doc, HEADING) else {
        return Vec::new();
    };

    let mut samples = Vec::new();
    for row in rows(&table).iter().skip(1) {
        let cells = cell_texts(*row);
        if cells.len() < 4 {
            continue;
        }
        let (start, state, duration, energy_drained) = (&cells[0], &cells[1], &cells[2], &cells[3]);
        if energy_drained == NO_DATA || !ACTIVE_STATES.contains(&state.as_str()) {
            continue;
        }
        let Some(hours_used) = parse_duration_hours(duration) else {
            continue;
        };
        if hours_used == 0.0 {
            continue;
        }
        let Ok(started_at) = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S") else {
            continue;
        };
        samples.push(UsageSample {
            started_at,
            hours_used,
        });
    }
    samples.sort_by_key(|s| s.started_at);
    samples
}

/// `H:MM:SS` (hours may exceed one digit) into fractional hours.
fn parse_duration_hours(text: &str) -> Option<f64> {
    let parts: Vec<i64> = text
        .split(':')
        .map(|p| p.trim().parse::<i64>())
        .collect::<Result<_, _>>()
        .ok()?;
    if parts.len() < 3 {
        return None;
    }
    Some(parts[0] as f64 + parts[1] as f64 / 60.0 + parts[2] as f64 / 3600.0)
}
