//! DOM helpers shared by the section parsers.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("static selector"));
static TD: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("static selector"));

/// Locate the first `<table>` following a heading text.
///
/// The heading is matched by case-insensitive substring over text nodes in
/// document order; the section table is the next table element after the
/// matching node. Returns `None` when neither is found.
pub(crate) fn table_after_heading<'a>(doc: &'a Html, heading: &str) -> Option<ElementRef<'a>> {
    let needle = heading.to_lowercase();
    let mut heading_seen = false;
    for node in doc.tree.root().descendants() {
        if !heading_seen {
            if let Some(text) = node.value().as_text() {
                if text.to_lowercase().contains(&needle) {
                    heading_seen = true;
                }
            }
        } else if let Some(el) = node.value().as_element() {
            if el.name() == "table" {
                return ElementRef::wrap(node);
            }
        }
    }
    None
}

/// All `<tr>` rows of a table, in document order.
pub(crate) fn rows<'a>(table: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    table.select(&TR).collect()
}

/// Trimmed text content of each `<td>` cell of a row.
pub(crate) fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
    row.select(&TD)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect()
}

/// Digits-only integer coercion; anything without digits becomes 0.
pub(crate) fn digits_only_u64(s: &str) -> u64 {
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
