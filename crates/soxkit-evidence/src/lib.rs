//! # soxkit-evidence — Evidence Ingestion & Validation Pipeline
//!
//! The core of the audit stack: content-addressed storage of uploaded
//! evidence files, heuristic field extraction from text uploads, and
//! cross-validation of extracted fields against a linked control's
//! declared attributes.
//!
//! ## Data flow
//!
//! ```text
//! upload bytes ──▶ EvidenceStore streams to disk while hashing
//!                        │
//!                        ▼
//!                  FieldExtractor (if the filename is text-like)
//!                        │
//!                        ▼
//!                  cross_validate (if a control is linked)
//!                        │
//!                        ▼
//!                  EvidenceMetadata stored and returned
//! ```
//!
//! ## Invariants
//!
//! - `size_bytes` equals the bytes written to the blob; zero-byte uploads
//!   are rejected and leave nothing behind.
//! - The SHA-256 hash covers the exact persisted bytes, independent of the
//!   declared content type.
//! - Every abort during ingestion removes the partial blob — cleanup is a
//!   scoped guard on the blob path, not a code path that can be skipped.
//! - Without a linked control, `potential_exceptions` is always empty.

pub mod metadata;
pub mod store;

pub use metadata::{EvidenceMetadata, ExtractionStatus, IngestRequest};
pub use store::{EvidenceStore, EvidenceStoreConfig, MAX_UPLOAD_BYTES};
