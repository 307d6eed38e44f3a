//! # soxkit-core — Foundational Types for the Soxkit Audit Stack
//!
//! This crate is the bedrock of the soxkit workspace. Every other crate
//! depends on `soxkit-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `ControlId`,
//!    `EvidenceId`, `TestRunId`, `WorkpaperId` — all newtypes over UUIDs.
//!    No bare strings for identifiers, and no passing a control id where
//!    an evidence id is expected.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so every record renders the same
//!    instant identically.
//!
//! 3. **Single `AttributeType` enum.** One definition, six variants,
//!    exhaustive `match` everywhere. Adding an attribute forces every
//!    consumer to handle it.
//!
//! 4. **Streaming content digests.** Evidence uploads are hashed while
//!    they stream to disk; `StreamingDigest` wraps the incremental SHA-256
//!    accumulator and `ContentDigest` carries the result.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `soxkit-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod attribute;
pub mod digest;
pub mod error;
pub mod identity;
pub mod store;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use attribute::AttributeType;
pub use digest::{ContentDigest, StreamingDigest};
pub use error::{AuditError, AuditResult};
pub use identity::{ControlId, EvidenceId, TestRunId, WorkpaperId};
pub use store::Store;
pub use temporal::Timestamp;
