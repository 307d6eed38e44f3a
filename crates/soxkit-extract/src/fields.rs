//! # Extracted Field Keys
//!
//! The closed set of fields the heuristic extractor can produce. Keys
//! serialize as `snake_case` strings; the mapping is a `BTreeMap` so
//! iteration order is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A field the extractor can pull out of evidence text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    /// A date in `YYYY-MM-DD` or `MM/DD/YYYY` form.
    Date,
    /// A monetary amount, optionally dollar-signed and comma-grouped.
    Amount,
    /// The name following a "preparer" / "prepared by" label.
    Preparer,
    /// The name following an "approver" / "approved by" label.
    Approver,
}

impl FieldKey {
    /// Return the string representation of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Preparer => "preparer",
            Self::Approver => "approver",
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from field key to the first matching substring, trimmed.
///
/// Empty when the upload is not text-like or nothing matched.
pub type ExtractedFields = BTreeMap<FieldKey, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(FieldKey::Date.to_string(), "date");
        assert_eq!(FieldKey::Approver.to_string(), "approver");
    }

    #[test]
    fn test_serializes_as_map_key() {
        let mut fields = ExtractedFields::new();
        fields.insert(FieldKey::Date, "2024-01-05".to_string());
        fields.insert(FieldKey::Amount, "1,200.00".to_string());
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-05","amount":"1,200.00"}"#);
    }

    #[test]
    fn test_deserializes_from_map_key() {
        let json = r#"{"preparer":"Jane Doe"}"#;
        let fields: ExtractedFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.get(&FieldKey::Preparer).map(String::as_str), Some("Jane Doe"));
    }

    #[test]
    fn test_btreemap_iterates_in_key_order() {
        let mut fields = ExtractedFields::new();
        fields.insert(FieldKey::Approver, "a".to_string());
        fields.insert(FieldKey::Date, "d".to_string());
        let keys: Vec<FieldKey> = fields.keys().copied().collect();
        assert_eq!(keys, vec![FieldKey::Date, FieldKey::Approver]);
    }
}
