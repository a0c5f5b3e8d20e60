//! Excel exporter
//!
//! Writes a single worksheet: the header row in row 0, then one row per
//! record. Cells are written as strings and there is no index column.

use crate::crawler::PageRecord;
use crate::output::traits::{ExportResult, Exporter, COLUMNS};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::Path;

/// Longest string Excel accepts in one cell, in characters
const MAX_CELL_CHARS: usize = 32_767;

/// Exporter producing an `.xlsx` workbook
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxExporter;

impl Exporter for XlsxExporter {
    fn export(&self, records: &[PageRecord], destination: &Path) -> ExportResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        write_row(worksheet, 0, COLUMNS)?;
        for (row, record) in (1u32..).zip(records) {
            write_row(
                worksheet,
                row,
                [
                    record.title.as_str(),
                    record.url.as_str(),
                    record.text.as_str(),
                ],
            )?;
        }

        workbook.save(destination)?;

        Ok(())
    }
}

/// Writes three string cells starting at column 0
fn write_row(worksheet: &mut Worksheet, row: u32, cells: [&str; 3]) -> Result<(), XlsxError> {
    for (col, cell) in (0u16..).zip(cells) {
        worksheet.write_string(row, col, fit_cell(cell))?;
    }
    Ok(())
}

/// Cuts text that would overflow an Excel cell
fn fit_cell(text: &str) -> String {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
