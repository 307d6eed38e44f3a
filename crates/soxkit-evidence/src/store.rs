//! # Evidence Store
//!
//! Owns the mapping from evidence identifier to metadata and the on-disk
//! blob for each upload. Ingestion is a single pass over the input
//! combining a SHA-256 accumulator, a byte counter, and a bounded writer;
//! a scoped guard deletes the blob on every non-success exit path,
//! including panics.
//!
//! ## Concurrency
//!
//! The registry is a [`Store`] guarded by a non-poisoning RwLock, so
//! insert/lookup/delete are each atomic as a unit. Blob paths embed a
//! fresh UUID per upload, so two ingestions never share a destination and
//! blob writes need no cross-upload coordination. Ingestion is strictly
//! synchronous request/response — no background tasks, timers, or retries.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use soxkit_control::{cross_validate, ControlRegistry};
use soxkit_core::{AuditError, AuditResult, ContentDigest, EvidenceId, Store, StreamingDigest, Timestamp};
use soxkit_extract::{ExtractedFields, FieldExtractor, HeuristicExtractor};

use crate::metadata::{blob_name, sanitize_filename, EvidenceMetadata, ExtractionStatus, IngestRequest};

/// Upload streaming chunk size: 1 MiB.
const CHUNK_SIZE: usize = 1024 * 1024;

/// Default upload size ceiling: 50 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Content type substituted when an upload declares none.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Placeholder authenticity values. No scoring logic exists; these are
/// fixed fields kept for output-shape compatibility.
const AUTHENTICITY_SCORE_PLACEHOLDER: f64 = 0.5;
const AUTHENTICITY_NOTES_PLACEHOLDER: &str = "Basic heuristic placeholder.";

/// Configuration for an [`EvidenceStore`].
#[derive(Debug, Clone)]
pub struct EvidenceStoreConfig {
    /// Directory holding the evidence blobs.
    pub evidence_dir: PathBuf,
    /// Upload size ceiling in bytes.
    pub max_upload_bytes: u64,
}

impl EvidenceStoreConfig {
    /// Create a configuration with the default 50 MiB ceiling.
    pub fn new(evidence_dir: impl Into<PathBuf>) -> Self {
        Self {
            evidence_dir: evidence_dir.into(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }

    /// Override the upload size ceiling.
    pub fn with_max_upload_bytes(mut self, max_upload_bytes: u64) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

/// Content-addressed store for uploaded evidence.
///
/// Holds the metadata registry, the blob directory, a handle to the
/// control registry for linked-control checks, and the extraction
/// strategy (defaults to [`HeuristicExtractor`]).
pub struct EvidenceStore {
    config: EvidenceStoreConfig,
    registry: Store<EvidenceMetadata>,
    controls: ControlRegistry,
    extractor: Box<dyn FieldExtractor + Send + Sync>,
}

impl std::fmt::Debug for EvidenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvidenceStore")
            .field("config", &self.config)
            .field("records", &self.registry.len())
            .finish()
    }
}

impl EvidenceStore {
    /// Create an evidence store, creating the blob directory if needed.
    pub fn new(config: EvidenceStoreConfig, controls: ControlRegistry) -> AuditResult<Self> {
        Self::with_extractor(config, controls, Box::new(HeuristicExtractor::new()))
    }

    /// Create an evidence store with a custom extraction strategy.
    pub fn with_extractor(
        config: EvidenceStoreConfig,
        controls: ControlRegistry,
        extractor: Box<dyn FieldExtractor + Send + Sync>,
    ) -> AuditResult<Self> {
        fs::create_dir_all(&config.evidence_dir)?;
        Ok(Self {
            config,
            registry: Store::new(),
            controls,
            extractor,
        })
    }

    /// Ingest an upload: stream it to a blob while hashing, extract
    /// fields, cross-validate against the linked control, and store the
    /// assembled metadata record.
    ///
    /// # Errors
    ///
    /// - [`AuditError::NotFound`] if a linked control id is unknown
    ///   (checked before any byte is read or written).
    /// - [`AuditError::PayloadTooLarge`] once the stream exceeds the
    ///   configured ceiling; the partial blob is removed.
    /// - [`AuditError::Validation`] for a zero-byte stream; nothing is
    ///   retained.
    /// - [`AuditError::Io`] for disk failures; the partial blob is removed.
    pub fn ingest(
        &self,
        mut reader: impl Read,
        request: IngestRequest,
    ) -> AuditResult<EvidenceMetadata> {
        let filename = sanitize_filename(request.filename.as_deref());

        // Linked-control check happens before any bytes move.
        let control = match &request.control_id {
            Some(control_id) => Some(
                self.controls
                    .get(control_id)
                    .ok_or_else(|| AuditError::NotFound(format!("control {control_id}")))?,
            ),
            None => None,
        };

        let id = EvidenceId::new();
        let blob = blob_name(&id, &filename);
        let path = self.config.evidence_dir.join(&blob);

        // The guard owns the blob until the record is assembled; any exit
        // before `disarm()` removes the file.
        let mut guard = BlobGuard::new(path.clone());
        let (digest, size_bytes) = self.stream_to_blob(&mut reader, &path)?;

        let extracted_fields = self.extract_from_blob(&filename, &path);
        let extraction_status = if extracted_fields.is_empty() {
            ExtractionStatus::Accepted
        } else {
            ExtractionStatus::Complete
        };

        let potential_exceptions = match &control {
            Some(control) => cross_validate(control, &extracted_fields),
            None => Vec::new(),
        };

        let metadata = EvidenceMetadata {
            id,
            filename,
            content_type: request
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            size_bytes,
            uploaded_at: Timestamp::now(),
            linked_control_id: request.control_id,
            notes: request.notes,
            sha256: digest.to_hex(),
            blob_name: blob,
            extracted_fields,
            extraction_status,
            potential_exceptions,
            authenticity_score: Some(AUTHENTICITY_SCORE_PLACEHOLDER),
            authenticity_notes: Some(AUTHENTICITY_NOTES_PLACEHOLDER.to_string()),
        };

        self.registry.insert(*id.as_uuid(), metadata.clone());
        guard.disarm();

        tracing::info!(
            evidence_id = %id,
            filename = %metadata.filename,
            size_bytes,
            sha256 = %metadata.sha256,
            extraction_status = %metadata.extraction_status,
            "ingested evidence"
        );
        Ok(metadata)
    }

    /// Retrieve a record and an open read handle to its blob.
    ///
    /// A registry entry whose backing blob is missing from disk is a
    /// data-integrity failure, reported as `NotFound` like a missing
    /// record.
    pub fn get(&self, id: &EvidenceId) -> AuditResult<(EvidenceMetadata, File)> {
        let metadata = self
            .registry
            .get(id.as_uuid())
            .ok_or_else(|| AuditError::NotFound(format!("evidence {id}")))?;
        let path = self.blob_path(&metadata);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AuditError::NotFound(format!("evidence blob for {id}")));
            }
            Err(e) => return Err(e.into()),
        };
        Ok((metadata, file))
    }

    /// Delete a record and its blob, returning the removed metadata.
    ///
    /// Deletion is not transactional across the two steps: the registry
    /// entry is removed first, and an already-absent blob is not an error.
    pub fn delete(&self, id: &EvidenceId) -> AuditResult<EvidenceMetadata> {
        let metadata = self
            .registry
            .remove(id.as_uuid())
            .ok_or_else(|| AuditError::NotFound(format!("evidence {id}")))?;
        let path = self.blob_path(&metadata);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        tracing::info!(evidence_id = %id, "deleted evidence");
        Ok(metadata)
    }

    /// List all current records, order unspecified.
    pub fn list(&self) -> Vec<EvidenceMetadata> {
        self.registry.list()
    }

    /// Whether a record with this identifier exists in the registry.
    pub fn contains(&self, id: &EvidenceId) -> bool {
        self.registry.contains(id.as_uuid())
    }

    /// Reconstruct the blob path from metadata fields alone.
    pub fn blob_path(&self, metadata: &EvidenceMetadata) -> PathBuf {
        self.config
            .evidence_dir
            .join(blob_name(&metadata.id, &metadata.filename))
    }

    /// Single pass over the upload: write chunks to the blob while feeding
    /// the hash accumulator and the byte counter, enforcing the ceiling.
    fn stream_to_blob(
        &self,
        reader: &mut impl Read,
        path: &Path,
    ) -> AuditResult<(ContentDigest, u64)> {
        let mut file = File::create(path)?;
        let mut digest = StreamingDigest::new();
        let mut size_bytes: u64 = 0;
        let mut buf = vec![0u8; CHUNK_SIZE];

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            size_bytes += n as u64;
            if size_bytes > self.config.max_upload_bytes {
                return Err(AuditError::PayloadTooLarge {
                    limit_bytes: self.config.max_upload_bytes,
                });
            }
            digest.update(&buf[..n]);
            file.write_all(&buf[..n])?;
        }

        if size_bytes == 0 {
            return Err(AuditError::Validation("empty upload".to_string()));
        }
        file.flush()?;
        Ok((digest.finalize(), size_bytes))
    }

    /// Re-read the persisted blob and extract fields from it.
    ///
    /// The extension gate fires before the read, so non-text blobs are
    /// never loaded. A read failure degrades to an empty mapping —
    /// extraction never fails an ingestion.
    fn extract_from_blob(&self, filename: &str, path: &Path) -> ExtractedFields {
        if !self.extractor.applies_to(filename) {
            return ExtractedFields::new();
        }
        match fs::read(path) {
            Ok(bytes) => self.extractor.extract(filename, &bytes),
            Err(_) => ExtractedFields::new(),
        }
    }
}

/// Removes the blob at `path` on drop unless disarmed.
///
/// Arms the cleanup-on-abort contract: every exit from `ingest` before
/// the metadata record is stored — error return or panic — deletes the
/// partial blob.
struct BlobGuard {
    path: PathBuf,
    armed: bool,
}

impl BlobGuard {
    fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for BlobGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}
