//! Serialization of extraction records to a tabular file.
//!
//! - `csv`: CSV and TSV rows with quoting
//! - `json`: pretty-printed JSON array

use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::core::ExtractionRecord;

pub mod csv;
pub mod json;

/// Column headers, in output order.
pub const COLUMNS: &[&str] = &[
    "File",
    "Line",
    "Text",
    "Pattern",
    "Source",
    "Mixed",
    "Full Line",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    /// Picks the format from the file extension, CSV when unknown.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => ExportFormat::Json,
            Some("tsv") => ExportFormat::Tsv,
            _ => ExportFormat::Csv,
        }
    }
}

/// Writes the records to `path`, creating parent directories as needed.
pub fn write_records(path: &Path, format: ExportFormat, records: &[ExtractionRecord]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => csv::write_records(&mut writer, records, ',')?,
        ExportFormat::Tsv => csv::write_records(&mut writer, records, '\t')?,
        ExportFormat::Json => json::write_records(&mut writer, records)?,
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
