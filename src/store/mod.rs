//! Append-only CSV store
//!
//! The CSV file is the only durable state in the whole pipeline. The store
//! writes the header once, appends one complete row per interview, and never
//! rewrites or reorders earlier rows; that discipline is what makes resume
//! safe (an interrupted run leaves a valid prefix).

mod resume;
mod schema;

pub use resume::SeenIds;
pub use schema::{Record, COLUMNS};

use crate::{Result, ScrapeError};
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Handle to the append-only CSV file.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the header row if the file is absent or empty; no-op otherwise.
    pub fn ensure_header(&self) -> Result<()> {
        let has_content = std::fs::metadata(&self.path)
            .map(|m| m.len() > 0)
            .unwrap_or(false);
        if has_content {
            return Ok(());
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| {
            ScrapeError::Store(format!(
                "cannot create output file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        writer.write_record(COLUMNS)?;
        writer.flush()?;
        Ok(())
    }

    /// Appends one row. Each call is a single complete row write; earlier
    /// rows are never touched.
    pub fn append(&self, record: &Record) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }

    /// Scans the file once and returns the set of non-empty interview ids.
    ///
    /// Any read problem (missing file, unreadable header, malformed rows)
    /// degrades to a smaller (possibly empty) set rather than an error.
    /// Resume then falls back toward a full re-crawl, which may duplicate
    /// rows; that tradeoff favors availability over strict dedup.
    pub fn known_ids(&self) -> HashSet<String> {
        let mut ids = HashSet::new();

        let mut reader = match csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
        {
            Ok(reader) => reader,
            Err(_) => return ids,
        };

        let id_column = match reader.headers() {
            Ok(headers) => headers.iter().position(|name| name == "interview_id"),
            Err(_) => None,
        };
        let Some(id_column) = id_column else {
            if std::fs::metadata(&self.path).map(|m| m.len() > 0).unwrap_or(false) {
                tracing::warn!(
                    "Output file {} has no interview_id column; resuming from scratch",
                    self.path.display()
                );
            }
            return ids;
        };

        for record in reader.records().flatten() {
            if let Some(id) = record.get(id_column) {
                let id = id.trim();
                if !id.is_empty() {
                    ids.insert(id.to_string());
                }
            }
        }

        ids
    }

    /// Counts data rows, tolerating malformed lines. Used by `--stats`.
    pub fn row_count(&self) -> usize {
        match csv::ReaderBuilder::new().flexible(true).from_path(&self.path) {
            Ok(mut reader) => reader.records().flatten().count(),
            Err(_) => 0,
        }
    }
}
