//! Error handling for the fedi extractor application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FediExtractorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF conversion error: {0}")]
    PdfConversion(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output write error: {0}")]
    OutputWrite(String),
}

pub type Result<T> = std::result::Result<T, FediExtractorError>;

impl FediExtractorError {
    /// Exit status for the process when this error terminates a run.
    /// Usage problems (bad arguments, wrong file type) exit with 2,
    /// everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            FediExtractorError::InvalidInput(_) | FediExtractorError::UnsupportedFormat(_) => 2,
            _ => 1,
        }
    }
}
