//! CLI interface for the fedi extractor

use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fedi-extractor")]
#[command(about = "Extract fediverse handles from a document into a CSV list")]
#[command(
    long_about = "Scan a PDF, Markdown, or text document for fediverse handles (@user@instance and profile URL forms) and write the unique set to a CSV file tagged with a list name"
)]
pub struct Cli {
    /// List name prefixed to every output row
    pub listname: String,

    /// Path to the input document (PDF, TXT, MD)
    pub input_file: PathBuf,

    /// Output CSV path (default: fediverse_usernames.csv, or the configured path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
