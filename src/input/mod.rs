//! Document loading and text extraction

pub mod file_detector;
pub mod manager;
pub mod text_extractor;
