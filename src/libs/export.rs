//! Entry export for external analysis and backup.
//!
//! Exports flatten entries through [`crate::libs::formatter`] so both
//! formats share one row shape: sequential id, local start/end, `HH:MM`
//! duration, raw text and the extracted tags. CSV targets spreadsheets
//! and quick shell processing; JSON preserves the rows as a
//! pretty-printed array for programmatic use.

use crate::libs::entry::Entry;
use crate::libs::formatter::{FormatEntries, FormattedEntry};
use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Writes entry collections to disk in the selected format.
pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Exports the entries and returns the written file path.
    ///
    /// Without an explicit output path a timestamped file name is
    /// generated in the current directory.
    pub fn export(&self, entries: &[Entry], now: DateTime<Utc>) -> Result<PathBuf> {
        let rows = entries.format(now);
        let path = self.resolve_output();

        match self.format {
            ExportFormat::Csv => write_csv(&rows, &path)?,
            ExportFormat::Json => write_json(&rows, &path)?,
        }

        Ok(path)
    }

    fn resolve_output(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(format!(
                "stint_entries_{}.{}",
                Local::now().format("%Y-%m-%d"),
                self.format.extension()
            )),
        }
    }
}

fn write_csv(rows: &[FormattedEntry], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(rows: &[FormattedEntry], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(&file, rows)?;
    Ok(())
}
