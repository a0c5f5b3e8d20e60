//! Exporter traits and types
//!
//! This module defines the trait interface for exporters and the errors
//! they can report.

use crate::crawler::PageRecord;
use std::path::Path;
use thiserror::Error;

/// Column headers, in output order
pub const COLUMNS: [&str; 3] = ["Page Title", "Page URL", "Page Content"];

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Excel error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Trait for table writers
///
/// An exporter writes one row per record with the three [`COLUMNS`], in
/// the order given, replacing whatever was at `destination` before.
pub trait Exporter {
    /// Writes `records` to `destination`
    ///
    /// # Arguments
    ///
    /// * `records` - Rows to write, in order
    /// * `destination` - File to create or overwrite
    fn export(&self, records: &[PageRecord], destination: &Path) -> ExportResult<()>;
}
