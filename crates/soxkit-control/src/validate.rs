//! # Cross-Validator
//!
//! Checks a control's declared attributes against the fields extracted
//! from a piece of evidence. Each attribute that requires a field the
//! extractor did not find contributes one fixed diagnostic string.
//!
//! ## Rule table
//!
//! | Attribute       | Required field |
//! |-----------------|----------------|
//! | `authorization` | `approver`     |
//! | `timeliness`    | `date`         |
//! | `accuracy`      | `amount`       |
//!
//! `occurrence`, `completeness`, and `sod` have no extraction-field
//! requirement and pass through unchecked. This is a known limitation of
//! the current rule set, not an invitation to invent rules here.

use soxkit_core::AttributeType;
use soxkit_extract::{ExtractedFields, FieldKey};

use crate::control::Control;

/// Evaluate a control's attributes against extracted fields.
///
/// Iterates the control's declared attributes in stored order and appends
/// exactly one exception string per failed rule. No deduplication is
/// performed, so a (malformed) duplicate attribute would yield a duplicate
/// exception. Never fails; an evidence record with no extracted fields
/// simply collects one exception per requiring attribute.
pub fn cross_validate(control: &Control, fields: &ExtractedFields) -> Vec<String> {
    let mut exceptions = Vec::new();
    for attribute in &control.attributes {
        let missing = match attribute {
            AttributeType::Authorization if !fields.contains_key(&FieldKey::Approver) => {
                Some("Missing approver for authorization attribute.")
            }
            AttributeType::Timeliness if !fields.contains_key(&FieldKey::Date) => {
                Some("Missing date for timeliness attribute.")
            }
            AttributeType::Accuracy if !fields.contains_key(&FieldKey::Amount) => {
                Some("Missing amount for accuracy attribute.")
            }
            _ => None,
        };
        if let Some(message) = missing {
            exceptions.push(message.to_string());
        }
    }
    exceptions
}
