//! CSV dataset writer.
//!
//! Appends session records to a persistent CSV file. The header row is
//! written if and only if the file is empty at the moment of the write,
//! so repeated runs against the same path share a single header.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{StorageError, StorageResult};
use crate::session::AnalysisRecord;

/// Append-only writer for the sentiment dataset file.
#[derive(Debug, Clone)]
pub struct DatasetWriter {
    path: PathBuf,
}

impl DatasetWriter {
    /// Create a writer targeting `path`. The file is not touched until
    /// the first non-empty append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The dataset path this writer appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `records` as CSV rows, creating the file if absent.
    ///
    /// An empty slice is a no-op and never creates or modifies the file.
    /// Embedded commas, quotes, and newlines in text fields are quoted by
    /// the CSV serializer, so the file round-trips through any conformant
    /// reader.
    pub fn append(&self, records: &[AnalysisRecord]) -> StorageResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| StorageError::Open {
                path: self.path.display().to_string(),
                source,
            })?;

        // Header goes in only when the file is empty at open time.
        let write_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);

        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        info!(
            path = %self.path.display(),
            rows = records.len(),
            header = write_header,
            "Session records appended to dataset"
        );
        Ok(())
    }
}
