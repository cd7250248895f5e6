//! Fedi extractor library

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod input;
pub mod output;

pub use config::Config;
pub use error::{FediExtractorError, Result};
pub use extractor::HandleExtractor;
