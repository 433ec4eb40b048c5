//! # Result Export
//!
//! Renders result sets as CSV or JSON and hands the rendered text to an
//! [`ExportTarget`].
//!
//! ## Formats
//!
//! - **CSV**: header `filename,title,description,keywords`, one row per
//!   result, every field double-quoted, keywords joined with `", "`. Embedded
//!   quotes are doubled so titles containing `"` survive a round trip through
//!   spreadsheet tools.
//! - **JSON**: pretty-printed array of results with the fields `id`,
//!   `filename`, `title`, `description`, `keywords`.
//!
//! ## Targets
//!
//! - [`DirectoryTarget`] writes `metadata-export-{unix_millis}.{ext}` files
//! - [`StdoutTarget`] prints the content, for piping
//!
//! Export never mutates results; a failed delivery can simply be retried.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::models::{ResultField, ResultItem};
use crate::traits::ExportTarget;

const CSV_HEADER: [&str; 4] = ["filename", "title", "description", "keywords"];
const KEYWORD_SEPARATOR: &str = ", ";

/// Supported export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Render `items` in this format
    pub fn render(self, items: &[ResultItem]) -> Result<String> {
        match self {
            ExportFormat::Csv => Ok(to_csv(items)),
            ExportFormat::Json => to_json(items),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_uppercase())
    }
}

/// Render results as CSV
pub fn to_csv(items: &[ResultItem]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for item in items {
        let keywords = item.keywords.join(KEYWORD_SEPARATOR);
        let row = [
            item.filename.as_str(),
            item.title.as_str(),
            item.description.as_str(),
            keywords.as_str(),
        ]
        .iter()
        .map(|field| quote_csv(field))
        .collect::<Vec<_>>()
        .join(",");
        lines.push(row);
    }

    lines.join("\n")
}

fn quote_csv(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render results as a pretty-printed JSON array
pub fn to_json(items: &[ResultItem]) -> Result<String> {
    serde_json::to_string_pretty(items).context("Failed to serialize results to JSON")
}

/// Plain text of one field, as copied to the clipboard
pub fn clipboard_text(item: &ResultItem, field: ResultField) -> String {
    match field {
        ResultField::Title => item.title.clone(),
        ResultField::Description => item.description.clone(),
        ResultField::Keywords => item.keywords.join(KEYWORD_SEPARATOR),
    }
}

/// `metadata-export-{unix_millis}.{ext}`
pub fn export_file_name(format: ExportFormat, at: DateTime<Utc>) -> String {
    format!(
        "metadata-export-{}.{}",
        at.timestamp_millis(),
        format.extension()
    )
}

/// Writes exports into a directory, creating it when missing
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ExportTarget for DirectoryTarget {
    fn name(&self) -> &str {
        "directory"
    }

    async fn deliver(&self, file_name: &str, content: &str) -> Result<String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create export directory {}", self.dir.display()))?;

        let path = self.dir.join(file_name);
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(path.display().to_string())
    }
}

/// Prints exports to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTarget;

#[async_trait]
impl ExportTarget for StdoutTarget {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn deliver(&self, _file_name: &str, content: &str) -> Result<String> {
        println!("{content}");
        Ok("standard output".to_string())
    }
}
