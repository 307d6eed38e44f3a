//! # Error Types — Shared Taxonomy
//!
//! The error taxonomy shared by every component of the audit stack. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! Three named kinds cover the domain failures; everything else is an
//! unclassified I/O failure:
//!
//! - `Validation` — malformed or empty input; not retryable without the
//!   caller changing the input.
//! - `NotFound` — a referenced entity is absent: control, evidence record,
//!   test run, or the backing blob on disk.
//! - `PayloadTooLarge` — a streamed upload exceeded the fixed ceiling.
//! - `Io` — disk failures propagate directly; the ingestion routine cleans
//!   up any partial blob before surfacing them.
//!
//! All kinds are terminal. No component retries internally.

use thiserror::Error;

/// Convenience alias for results carrying [`AuditError`].
pub type AuditResult<T> = Result<T, AuditError>;

/// Top-level error type for the audit stack.
#[derive(Error, Debug)]
pub enum AuditError {
    /// Malformed or empty input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Referenced entity absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// Streamed upload exceeded the size ceiling.
    #[error("upload of more than {limit_bytes} bytes exceeds the size ceiling")]
    PayloadTooLarge {
        /// The configured ceiling in bytes.
        limit_bytes: u64,
    },

    /// Unclassified I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AuditError {
    /// Whether this error is the `NotFound` kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this error is the `Validation` kind.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this error is the `PayloadTooLarge` kind.
    pub fn is_payload_too_large(&self) -> bool {
        matches!(self, Self::PayloadTooLarge { .. })
    }
}
