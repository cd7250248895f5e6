//! CSV emission for extracted handle lists

use crate::error::{FediExtractorError, Result};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the handle list as a two-column CSV with header
/// `listname,username`, one row per handle.
///
/// The file is created or truncated, never appended to, so each run
/// replaces the previous list at the same path.
pub fn write_handle_list(path: &Path, listname: &str, handles: &BTreeSet<String>) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        FediExtractorError::OutputWrite(format!("failed to create '{}': {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "listname,username")
        .map_err(|e| write_error(path, e))?;

    for handle in handles {
        writeln!(writer, "{},{}", listname, handle).map_err(|e| write_error(path, e))?;
    }

    writer.flush().map_err(|e| write_error(path, e))?;
    Ok(())
}

fn write_error(path: &Path, e: std::io::Error) -> FediExtractorError {
    FediExtractorError::OutputWrite(format!("failed to write '{}': {}", path.display(), e))
}
