//! # soxkit CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Soxkit CLI — internal-control evidence toolchain.
///
/// Ingests evidence files with streaming SHA-256 hashing and heuristic
/// field extraction, and previews extraction results.
#[derive(Parser, Debug)]
#[command(name = "soxkit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Ingest a file into an evidence directory and print its record.
    Ingest(soxkit_cli::ingest::IngestArgs),
    /// Preview heuristic field extraction for a file.
    Extract(soxkit_cli::extract::ExtractArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest(args) => soxkit_cli::ingest::run(args),
        Commands::Extract(args) => soxkit_cli::extract::run(args),
    }
}
