//! # Content Digest — Content-Addressed Evidence Identity
//!
//! Defines `ContentDigest` and the incremental `StreamingDigest`
//! accumulator used while evidence uploads stream to disk.
//!
//! ## Integrity Invariant
//!
//! The digest covers the exact bytes persisted to the blob, independent
//! of the declared content type. Uploads are hashed chunk by chunk in the
//! same pass that writes them, so the stored digest can never diverge
//! from the stored bytes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A SHA-256 content digest over the full byte stream of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Compute the digest of a complete byte slice in one shot.
    ///
    /// Streaming paths should prefer [`StreamingDigest`].
    pub fn of(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        Self { bytes }
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

/// Incremental SHA-256 accumulator for streamed uploads.
///
/// Feed each chunk with [`update()`](Self::update) as it is written to
/// disk, then call [`finalize()`](Self::finalize) once the stream ends.
#[derive(Debug, Default)]
pub struct StreamingDigest {
    hasher: Sha256,
}

impl StreamingDigest {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of the stream into the accumulator.
    pub fn update(&mut self, chunk: &[u8]) {
        self.hasher.update(chunk);
    }

    /// Consume the accumulator and produce the digest.
    pub fn finalize(self) -> ContentDigest {
        let hash = self.hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        ContentDigest { bytes }
    }
}
