//! # Extract Subcommand
//!
//! Runs the heuristic field extractor over a local file and prints the
//! fields it would pull, without storing anything.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use soxkit_extract::{FieldExtractor, HeuristicExtractor};

/// Arguments for the extract subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// File to scan.
    pub file: PathBuf,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let filename = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bytes = fs::read(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let extractor = HeuristicExtractor::new();
    if !extractor.applies_to(&filename) {
        tracing::warn!(%filename, "extension is not text-like; nothing will be extracted");
    }
    let fields = extractor.extract(&filename, &bytes);

    println!("{}", serde_json::to_string_pretty(&fields)?);
    Ok(())
}
