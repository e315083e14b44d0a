//! "Installed batteries" section: one identity attribute per row.

use scraper::Html;

use crate::models::identity::{AttributeValue, BatteryIdentity, NUMERIC_KEYS};
use crate::parser::table::{cell_texts, digits_only_u64, rows, table_after_heading};

const HEADING: &str = "Installed batteries";

/// Parse the identity table; absent section yields an empty identity.
pub(crate) fn parse_installed_batteries(doc: &Html) -> BatteryIdentity {
    let Some(table) = table_after_heading(doc, HEADING) else {
        return BatteryIdentity::default();
    };

    let mut identity = BatteryIdentity::default();
    for row in rows(&table) {
        let cells = cell_texts(row);
        if cells.len() < 2 {
            continue;
        }
        let key = BatteryIdentity::normalize_key(&cells[0]);
        let value = if NUMERIC_KEYS.contains(&key.as_str()) {
            AttributeValue::Capacity(digits_only_u64(&cells[1]))
        } else {
            AttributeValue::Text(cells[1].clone())
        };
        identity.set(key, value);
    }
    identity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_attributes_with_numeric_coercion() {
        let doc = Html::parse_document(
            "<h2>Installed batteries</h2><table>\
             <tr><td>NAME</td><td>DELL X1234</td></tr>\
             <tr><td>Design Capacity</td><td>56,999 mWh</td></tr>\
             <tr><td>Full Charge Capacity</td><td>garbled</td></tr>\
             <tr><td>only one cell</td></tr>\
             </table>",
        );
        let id = parse_installed_batteries(&doc);
        assert_eq!(id.model_name(), Some("DELL X1234"));
        assert_eq!(id.design_capacity(), Some(56999));
        // non-numeric capacity text coerces to 0, not to a text attribute
        assert_eq!(id.full_charge_capacity(), Some(0));
        assert_eq!(id.len(), 3);
    }

    #[test]
    fn missing_section_yields_empty_identity() {
        let doc = Html::parse_document("<p>nothing here</p>");
        assert!(parse_installed_batteries(&doc).is_empty());
    }
}
