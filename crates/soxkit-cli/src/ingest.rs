//! # Ingest Subcommand
//!
//! Streams a local file into an evidence directory and prints the stored
//! metadata record as pretty JSON.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use soxkit_control::ControlRegistry;
use soxkit_evidence::{EvidenceStore, EvidenceStoreConfig, IngestRequest};

/// Arguments for the ingest subcommand.
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// File to ingest.
    pub file: PathBuf,

    /// Directory holding the evidence blobs.
    #[arg(long, default_value = "evidence")]
    pub evidence_dir: PathBuf,

    /// Declared filename; defaults to the file's base name.
    #[arg(long)]
    pub filename: Option<String>,

    /// Declared content type.
    #[arg(long)]
    pub content_type: Option<String>,

    /// Free-text notes to attach to the record.
    #[arg(long)]
    pub notes: Option<String>,
}

pub fn run(args: IngestArgs) -> anyhow::Result<()> {
    let filename = args.filename.or_else(|| {
        args.file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    });

    let reader = File::open(&args.file)
        .with_context(|| format!("opening {}", args.file.display()))?;
    let store = EvidenceStore::new(
        EvidenceStoreConfig::new(&args.evidence_dir),
        ControlRegistry::new(),
    )?;

    let metadata = store.ingest(
        reader,
        IngestRequest {
            filename,
            content_type: args.content_type,
            control_id: None,
            notes: args.notes,
        },
    )?;

    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}
