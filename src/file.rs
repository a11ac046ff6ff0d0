// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::data::ProductRecord;
use crate::error::ScrapeError;

/// Export text for the current options (header row per `include_headers`).
pub fn export_text(export: &ExportOptions, records: &[ProductRecord]) -> Result<String, ScrapeError> {
    to_export_string(records, export.include_headers, export.format.delim())
}

/// Write the export file described by `export`. Returns the final path written to.
pub fn write_export(export: &ExportOptions, records: &[ProductRecord]) -> Result<PathBuf, ScrapeError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = export_text(export, records)?;
    fs::write(&path, contents)?;
    logf!("Export: {} row(s) → {}", records.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// HTML anchor that downloads `text` as `file_name` through a base64 data URI.
pub fn download_link(text: &str, file_name: &str) -> String {
    let b64 = STANDARD.encode(text.as_bytes());
    format!(r#"<a href="data:file/csv;base64,{b64}" download="{file_name}">Download CSV File</a>"#)
}
