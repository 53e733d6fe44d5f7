//! Typed tenant-scoped configuration values.
//!
//! Settings are stored as JSON and come in exactly two shapes: a plain list
//! of strings, or a list of name+color entries. Reservation statuses and
//! types are resolved against these lists instead of database enums.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Well-known setting keys.
pub mod keys {
    /// Reservation status list (name + color).
    pub const RESERVATION_STATUSES: &str = "reservation_statuses";
    /// Reservation type list (plain strings).
    pub const RESERVATION_TYPES: &str = "reservation_types";
}

/// A named entry with a display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    /// Entry name.
    pub name: String,
    /// Display color (e.g., "#2e7d32").
    pub color: String,
}

/// A setting value, in one of its two stored shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Name + color entries.
    ColorOptions(Vec<ColorOption>),
    /// Plain string entries.
    Options(Vec<String>),
}

/// Setting parse errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The stored JSON matches neither supported shape.
    #[error("Setting value has an unsupported shape: {0}")]
    UnsupportedShape(#[from] serde_json::Error),
}

impl SettingValue {
    /// Parses a stored JSON value into one of the two supported shapes.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::UnsupportedShape` when the JSON matches
    /// neither shape.
    pub fn parse(value: &serde_json::Value) -> Result<Self, SettingsError> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Returns the entry names, whatever the shape.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Options(items) => items.iter().map(String::as_str).collect(),
            Self::ColorOptions(items) => items.iter().map(|i| i.name.as_str()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_list() {
        let value = json!(["short_stay", "long_stay"]);
        let parsed = SettingValue::parse(&value).expect("plain list");

        assert_eq!(parsed, SettingValue::Options(vec![
            "short_stay".to_string(),
            "long_stay".to_string(),
        ]));
        assert_eq!(parsed.names(), vec!["short_stay", "long_stay"]);
    }

    #[test]
    fn test_parse_color_list() {
        let value = json!([
            {"name": "confirmed", "color": "#2e7d32"},
            {"name": "cancelled", "color": "#c62828"}
        ]);
        let parsed = SettingValue::parse(&value).expect("color list");

        assert_eq!(parsed.names(), vec!["confirmed", "cancelled"]);
        match parsed {
            SettingValue::ColorOptions(items) => assert_eq!(items[0].color, "#2e7d32"),
            SettingValue::Options(_) => panic!("expected color options"),
        }
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(SettingValue::parse(&json!({"not": "a list"})).is_err());
        assert!(SettingValue::parse(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_empty_list_parses_as_color_options() {
        // Untagged enums try variants in order; an empty array matches the
        // first one. Either way, names() is empty.
        let parsed = SettingValue::parse(&json!([])).expect("empty list");
        assert!(parsed.names().is_empty());
    }
}
