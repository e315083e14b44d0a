//! Best-effort extraction of the three report sections.
//!
//! Each section is located by a case-insensitive heading text and parsed
//! independently: a missing heading or table yields an empty record set, and
//! a malformed row is skipped without aborting the rest of its section. The
//! only fatal failure on the ingest path is an unreadable input, which is
//! surfaced by [`crate::io::source`] before parsing starts.

mod capacity;
mod identity;
mod table;
mod usage;

use scraper::Html;

use crate::models::report::ParsedReport;

/// Parse raw report HTML into the three canonical record sets.
///
/// Never fails: sections degrade to empty on missing/malformed structure.
pub fn parse_report(html: &str) -> ParsedReport {
    let doc = Html::parse_document(html);
    ParsedReport {
        identity: identity::parse_installed_batteries(&doc),
        health_history: capacity::parse_capacity_history(&doc),
        usage_history: usage::parse_usage_history(&doc),
    }
}
