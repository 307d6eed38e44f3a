//! # Evidence Metadata
//!
//! The persisted record for an uploaded evidence file, the ingest request
//! shape, and the filename/blob-name derivation rules.
//!
//! The blob name `{evidence_uuid}_{sanitized_filename}` is part of the
//! durable contract: retrieval reconstructs the on-disk path from metadata
//! fields alone, so the naming scheme must never depend on anything that
//! is not stored in the record.

use serde::{Deserialize, Serialize};

use soxkit_core::{ControlId, EvidenceId, Timestamp};
use soxkit_extract::ExtractedFields;

/// Filename substituted when an upload declares none.
pub const DEFAULT_FILENAME: &str = "upload.bin";

/// Outcome of the extraction attempt for an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStatus {
    /// Extraction has not been attempted. Never survives a successful
    /// ingestion; reserved for records created outside the pipeline.
    Pending,
    /// Extraction was attempted and found nothing.
    Accepted,
    /// Extraction found at least one field.
    Complete,
}

impl ExtractionStatus {
    /// Return the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Complete => "complete",
        }
    }
}

impl std::fmt::Display for ExtractionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied parameters for an ingestion.
#[derive(Debug, Clone, Default)]
pub struct IngestRequest {
    /// Declared filename; sanitized to its final path segment.
    pub filename: Option<String>,
    /// Declared content type; defaults to `application/octet-stream`.
    pub content_type: Option<String>,
    /// Control to cross-validate against, if any.
    pub control_id: Option<ControlId>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// The persisted metadata record for an uploaded evidence file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceMetadata {
    /// Unique evidence identifier.
    pub id: EvidenceId,
    /// Sanitized filename (base name only, never a path).
    pub filename: String,
    /// Declared content type.
    pub content_type: String,
    /// Exact number of bytes persisted to the blob.
    pub size_bytes: u64,
    /// When the upload completed.
    pub uploaded_at: Timestamp,
    /// The control this evidence supports, if linked.
    pub linked_control_id: Option<ControlId>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Lowercase-hex SHA-256 of the persisted bytes.
    pub sha256: String,
    /// On-disk blob file name (`{uuid}_{filename}`).
    pub blob_name: String,
    /// Fields the extractor found. Non-empty iff `extraction_status`
    /// is `complete`.
    pub extracted_fields: ExtractedFields,
    /// Outcome of the extraction attempt.
    pub extraction_status: ExtractionStatus,
    /// Cross-validation exceptions. Empty when no control is linked.
    pub potential_exceptions: Vec<String>,
    /// Placeholder authenticity score. No real scoring is performed.
    pub authenticity_score: Option<f64>,
    /// Placeholder authenticity notes.
    pub authenticity_notes: Option<String>,
}

/// Reduce a declared filename to its final path segment.
///
/// Both `/` and `\` count as separators, so a path-like declared name can
/// never smuggle directory components into the blob name. Absent or empty
/// names fall back to [`DEFAULT_FILENAME`].
pub fn sanitize_filename(declared: Option<&str>) -> String {
    let base = declared
        .unwrap_or("")
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("");
    if base.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        base.to_string()
    }
}

/// Derive the on-disk blob file name for an evidence record.
pub fn blob_name(id: &EvidenceId, filename: &str) -> String {
    format!("{}_{}", id.as_uuid(), filename)
}
