//! # soxkit-cli — Command-Line Frontend
//!
//! One-shot operations against the audit stack: ingest an evidence file
//! into a blob directory and print the resulting metadata record, or
//! preview what the heuristic extractor would pull from a file without
//! storing anything.

pub mod extract;
pub mod ingest;
