//! "Battery capacity history" section: health samples over time.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use crate::models::sample::HealthSample;
use crate::parser::table::{cell_texts, digits_only_u64, rows, table_after_heading};

const HEADING: &str = "Battery capacity history";

/// The period label ends with the period's end date.
static TRAILING_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}$").expect("static pattern"));

/// Parse the capacity-history table into health samples, sorted by date.
///
/// Row-level failures (short rows, zero design capacity, missing or invalid
/// trailing date) skip the row and keep going. The first row is a header.
pub(crate) fn parse_capacity_history(doc: &Html) -> Vec<HealthSample> {
    let Some(table) = table_after_heading(doc, HEADING) else {
        return Vec::new();
    };

    let mut samples = Vec::new();
    for row in rows(&table).iter().skip(1) {
        let cells = cell_texts(*row);
        if cells.len() < 3 {
            continue;
        }
        let full_charge = digits_only_u64(&cells[1]);
        let design = digits_only_u64(&cells[2]);
        if design == 0 {
            continue;
        }
        let Some(date_text) = TRAILING_DATE.find(&cells[0]) else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(date_text.as_str(), "%Y-%m-%d") else {
            continue;
        };
        let health = full_charge as f64 / design as f64 * 100.0;
        samples.push(HealthSample { date, health });
    }
    // stable: duplicate dates keep parse order
    samples.sort_by_key(|s| s.date);
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn computes_health_and_sorts_by_end_date() {
        let doc = Html::parse_document(
            "<h2>Battery capacity history</h2><table>\
             <tr><td>Period</td><td>Full</td><td>Design</td></tr>\
             <tr><td>2023-01-08 - 2023-02-01</td><td>4,900 mWh</td><td>5,000 mWh</td></tr>\
             <tr><td>2023-01-01 - 2023-01-07</td><td>5,000 mWh</td><td>5,000 mWh</td></tr>\
             </table>",
        );
        let samples = parse_capacity_history(&doc);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].date, date("2023-01-07"));
        assert_eq!(samples[0].health, 100.0);
        assert_eq!(samples[1].date, date("2023-02-01"));
        assert_eq!(samples[1].health, 98.0);
    }

    #[test]
    fn malformed_rows_are_skipped_individually() {
        let doc = Html::parse_document(
            "<h2>Battery capacity history</h2><table>\
             <tr><td>Period</td><td>Full</td><td>Design</td></tr>\
             <tr><td>2023-03-01</td><td>4,800</td><td>0 mWh</td></tr>\
             <tr><td>no trailing date</td><td>4,700</td><td>5,000</td></tr>\
             <tr><td>bad date 2023-13-45</td><td>4,700</td><td>5,000</td></tr>\
             <tr><td>short row</td><td>two cells</td></tr>\
             <tr><td>ok 2023-04-01</td><td>4,600</td><td>5,000</td></tr>\
             </table>",
        );
        let samples = parse_capacity_history(&doc);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].date, date("2023-04-01"));
        assert_eq!(samples[0].health, 92.0);
    }

    #[test]
    fn missing_section_is_empty_not_an_error() {
        let doc = Html::parse_document("<h2>Battery usage</h2><table></table>");
        assert!(parse_capacity_history(&doc).is_empty());
    }

    #[test]
    fn duplicate_dates_are_both_retained() {
        let doc = Html::parse_document(
            "<h2>Battery capacity history</h2><table>\
             <tr><td>Period</td><td>Full</td><td>Design</td></tr>\
             <tr><td>2023-01-07</td><td>5,000</td><td>5,000</td></tr>\
             <tr><td>2023-01-07</td><td>4,900</td><td>5,000</td></tr>\
             </table>",
        );
        let samples = parse_capacity_history(&doc);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].health, 100.0);
        assert_eq!(samples[1].health, 98.0);
    }
}
