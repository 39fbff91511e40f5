//! Writes generated companies as a JSON document.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::error::{MockDataError, Result};
use crate::generators::GeneratedCompany;

/// Serializes companies to a pretty-printed JSON array.
pub fn to_json_string(companies: &[GeneratedCompany]) -> Result<String> {
    Ok(serde_json::to_string_pretty(companies)?)
}

/// Writes the JSON array, plus a trailing newline, to any sink.
pub fn write_to(mut writer: impl Write, companies: &[GeneratedCompany]) -> Result<()> {
    let mut document = serde_json::to_vec_pretty(companies)?;
    document.push(b'\n');
    writer
        .write_all(&document)
        .and_then(|_| writer.flush())
        .map_err(|e| MockDataError::io("<writer>", e))
}

/// Writes datasets to a file path.
pub struct JsonWriter {
    path: PathBuf,
}

impl JsonWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Writes `companies` to the file, replacing any existing content.
    pub fn write_companies(&self, companies: &[GeneratedCompany]) -> Result<()> {
        info!(
            "Writing {} companies to {}...",
            companies.len(),
            self.path.display()
        );

        let mut document = serde_json::to_vec_pretty(companies)?;
        document.push(b'\n');
        std::fs::write(&self.path, document).map_err(|e| MockDataError::io(&self.path, e))?;

        info!("Wrote {}", self.path.display());
        Ok(())
    }
}
