//! Output module for writing crawl results
//!
//! This module handles:
//! - Serializing page records into a three-column table
//! - Choosing the table format (CSV, SQLite or Excel) from the output config

mod csv_output;
mod sqlite_output;
mod traits;
mod xlsx_output;

pub use csv_output::CsvExporter;
pub use sqlite_output::SqliteExporter;
pub use traits::{ExportError, ExportResult, Exporter, COLUMNS};
pub use xlsx_output::XlsxExporter;

use crate::config::{OutputConfig, OutputFormat};
use crate::crawler::PageRecord;

/// Returns the exporter for a table format
pub fn exporter_for(format: OutputFormat) -> Box<dyn Exporter> {
    match format {
        OutputFormat::Csv => Box::new(CsvExporter),
        OutputFormat::Sqlite => Box::new(SqliteExporter),
        OutputFormat::Xlsx => Box::new(XlsxExporter),
    }
}

/// Writes records to the destination named by the output configuration
///
/// # Arguments
///
/// * `records` - The records to write, in order
/// * `output` - Destination path and optional format
///
/// # Returns
///
/// * `Ok(())` - The file was written
/// * `Err(ExportError)` - The file could not be written
pub fn export_records(records: &[PageRecord], output: &OutputConfig) -> ExportResult<()> {
    let format = output.resolved_format();
    tracing::debug!(
        "Exporting {} records as {:?} to {}",
        records.len(),
        format,
        output.path.display()
    );

    exporter_for(format).export(records, &output.path)
}
