//! Attributes of the installed battery, as listed by the report.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute names whose values are capacities and get coerced to integers.
pub const NUMERIC_KEYS: [&str; 2] = ["design_capacity", "full_charge_capacity"];

/// Value of a single identity attribute.
///
/// Most attributes stay free-form text; the two known capacity attributes
/// are coerced to integers (digits only, non-numeric text becomes 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A capacity in mWh, digits-only coercion of the cell text.
    Capacity(u64),
    /// Verbatim (trimmed) cell text.
    Text(String),
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Capacity(mwh) => write!(f, "{mwh}"),
            AttributeValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Normalized attribute map for the installed battery.
///
/// Keys are lower-cased with spaces replaced by underscores; repeated keys
/// keep the last value seen. The map preserves the report's row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatteryIdentity {
    attributes: IndexMap<String, AttributeValue>,
}

impl BatteryIdentity {
    /// Normalize a raw attribute cell into a map key.
    pub fn normalize_key(raw: &str) -> String {
        raw.trim().to_lowercase().replace(' ', "_")
    }

    /// Insert an attribute under an already-normalized key (last value wins).
    pub fn set(&mut self, key: String, value: AttributeValue) {
        self.attributes.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Text value of an attribute, if present and textual.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.attributes.get(key) {
            Some(AttributeValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Coerced capacity value of an attribute, if present and numeric.
    pub fn capacity(&self, key: &str) -> Option<u64> {
        match self.attributes.get(key) {
            Some(AttributeValue::Capacity(mwh)) => Some(*mwh),
            _ => None,
        }
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.text("manufacturer")
    }

    pub fn model_name(&self) -> Option<&str> {
        self.text("name")
    }

    pub fn serial_number(&self) -> Option<&str> {
        self.text("serial_number")
    }

    pub fn design_capacity(&self) -> Option<u64> {
        self.capacity("design_capacity")
    }

    pub fn full_charge_capacity(&self) -> Option<u64> {
        self.capacity("full_charge_capacity")
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Attributes in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Human-readable summary of the well-known attributes.
    pub fn summary(&self) -> String {
        let design = self
            .design_capacity()
            .map(|mwh| format!("{mwh} mWh"))
            .unwrap_or_else(|| "N/A".to_string());
        format!(
            "Manufacturer: {}\nModel name: {}\nSerial number: {}\nDesign capacity: {}",
            self.manufacturer().unwrap_or("N/A"),
            self.model_name().unwrap_or("N/A"),
            self.serial_number().unwrap_or("N/A"),
            design,
        )
    }
}
