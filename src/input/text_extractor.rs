//! Text extraction from various file formats

use crate::error::{FediExtractorError, Result};
use pulldown_cmark::{Event, Parser, Tag};
use std::fs;
use std::path::Path;
use std::process::Command;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Converts PDFs by invoking the external `pdftotext` tool.
///
/// The tool writes into a uniquely named temporary directory that is
/// removed again on every exit path, including conversion failure, so
/// concurrent runs never collide on an intermediate file.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let workdir = tempfile::tempdir()?;
        let txt_path = workdir.path().join("pdftotext-output.txt");

        let output = Command::new("pdftotext")
            .arg(path)
            .arg(&txt_path)
            .output()
            .map_err(|e| {
                FediExtractorError::PdfConversion(format!(
                    "failed to run pdftotext on '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FediExtractorError::PdfConversion(format!(
                "pdftotext exited with {} for '{}': {}",
                output.status,
                path.display(),
                stderr.trim()
            )));
        }

        let text = fs::read_to_string(&txt_path)?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path)?;
        Ok(self.flatten_markdown(&markdown_content))
    }
}

impl MarkdownExtractor {
    /// Flatten markdown to plain text.
    ///
    /// Link and image destinations are emitted alongside the link text so
    /// that profile URLs hidden behind `[name](url)` links stay visible
    /// to the downstream scan.
    fn flatten_markdown(&self, markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::Start(Tag::Link(_, dest, _)) | Event::Start(Tag::Image(_, dest, _)) => {
                    text.push(' ');
                    text.push_str(&dest);
                    text.push(' ');
                }
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph) | Event::End(Tag::Heading(..)) | Event::End(Tag::Item) => {
                    text.push('\n');
                }
                _ => {}
            }
        }

        let lines: Vec<String> = text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}
