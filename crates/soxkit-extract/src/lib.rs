//! # soxkit-extract — Heuristic Field Extraction
//!
//! Scans text-like evidence uploads for the fields cross-validation cares
//! about: a date, a monetary amount, a preparer name, and an approver
//! name.
//!
//! ## Design
//!
//! - **Pure and failure-free.** Extraction is a function of
//!   `(filename, content)` only. Malformed input degrades to an empty
//!   mapping; nothing in this crate returns an error.
//! - **Syntactic heuristic, not a validator.** A string that looks like a
//!   date is a date for extraction purposes — `2024-13-99` is accepted.
//!   Cross-validation only asks whether a field is present.
//! - **Pluggable strategy.** The [`FieldExtractor`] trait is the seam for
//!   alternative backends (OCR, structured-template parsers) without
//!   touching the evidence store's orchestration.

pub mod extractor;
pub mod fields;

pub use extractor::{FieldExtractor, HeuristicExtractor};
pub use fields::{ExtractedFields, FieldKey};
