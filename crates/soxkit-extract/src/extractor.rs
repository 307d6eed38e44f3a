//! # Field Extractor
//!
//! The [`FieldExtractor`] capability trait and its regex-based default
//! implementation, [`HeuristicExtractor`].
//!
//! The extractor only attempts extraction on filenames with a plain-text
//! extension; everything else returns an empty mapping without the bytes
//! being inspected. Content is decoded as UTF-8 with invalid sequences
//! dropped, then scanned left to right: for each field only the first
//! match is kept.

use std::sync::LazyLock;

use regex::Regex;

use crate::fields::{ExtractedFields, FieldKey};

/// File extensions the extractor treats as text-like (case-insensitive).
const TEXT_EXTENSIONS: &[&str] = &["txt", "csv"];

/// `YYYY-MM-DD` or `MM/DD/YYYY`. Syntactic only — implausible calendar
/// dates are accepted.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}-\d{2}-\d{2}|\d{2}/\d{2}/\d{4}").expect("invalid date pattern")
});

/// Optional dollar sign, optional single whitespace, 1-3 digits, optional
/// comma-separated thousands groups, optional two-digit cents.
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$?\s?\d{1,3}(?:,\d{3})*(?:\.\d{2})?").expect("invalid amount pattern")
});

/// "preparer" / "prepared by" label, separator, captured name.
static PREPARER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:preparer|prepared by)[:\s]+([A-Za-z ,.'-]+)")
        .expect("invalid preparer pattern")
});

/// "approver" / "approved by" label, separator, captured name.
static APPROVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:approver|approved by)[:\s]+([A-Za-z ,.'-]+)")
        .expect("invalid approver pattern")
});

/// Strategy interface for pulling structured fields out of evidence bytes.
///
/// Implementations must be pure functions of `(filename, content)`: no
/// I/O, no hidden state, and no failures — absence of a match simply
/// omits the key.
pub trait FieldExtractor {
    /// Whether this extractor will attempt extraction for the given
    /// filename. When this returns `false`, the caller may skip reading
    /// the content entirely.
    fn applies_to(&self, filename: &str) -> bool;

    /// Extract fields from the content. Returns an empty mapping when the
    /// filename is not applicable or nothing matches.
    fn extract(&self, filename: &str, content: &[u8]) -> ExtractedFields;
}

/// Regex-based extractor for plain-text evidence (`.txt`, `.csv`).
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicExtractor;

impl HeuristicExtractor {
    /// Create the default heuristic extractor.
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for HeuristicExtractor {
    fn applies_to(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => TEXT_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)),
            None => false,
        }
    }

    fn extract(&self, filename: &str, content: &[u8]) -> ExtractedFields {
        let mut fields = ExtractedFields::new();
        if !self.applies_to(filename) {
            return fields;
        }

        let text = decode_dropping_invalid(content);
        if text.is_empty() {
            return fields;
        }

        let date_span = DATE_RE.find(&text).map(|m| (m.start(), m.end()));
        if let Some((start, end)) = date_span {
            fields.insert(FieldKey::Date, text[start..end].to_string());
        }

        // Digit runs already claimed by the date match are not amounts.
        // The span is masked out before the scan so a leading date is
        // never misread as an amount.
        let masked;
        let amount_haystack = match date_span {
            Some((start, end)) => {
                masked = format!(
                    "{}{}{}",
                    &text[..start],
                    " ".repeat(end - start),
                    &text[end..]
                );
                masked.as_str()
            }
            None => text.as_str(),
        };
        if let Some(m) = AMOUNT_RE.find(amount_haystack) {
            fields.insert(FieldKey::Amount, m.as_str().trim().to_string());
        }

        if let Some(caps) = PREPARER_RE.captures(&text) {
            fields.insert(FieldKey::Preparer, caps[1].trim().to_string());
        }
        if let Some(caps) = APPROVER_RE.captures(&text) {
            fields.insert(FieldKey::Approver, caps[1].trim().to_string());
        }

        fields
    }
}

/// Decode bytes as UTF-8, dropping invalid sequences instead of failing.
///
/// Replacement characters introduced by the lossy conversion are filtered
/// out, so malformed bytes vanish rather than splitting otherwise-matching
/// text.
fn decode_dropping_invalid(content: &[u8]) -> String {
    let text = String::from_utf8_lossy(content);
    if text.contains('\u{FFFD}') {
        text.chars().filter(|c| *c != '\u{FFFD}').collect()
    } else {
        text.into_owned()
    }
}
