//! CSV exporter
//!
//! Writes a header row followed by one row per record. Fields are quoted
//! by the `csv` crate when they contain separators, quotes or newlines.

use crate::crawler::PageRecord;
use crate::output::traits::{ExportResult, Exporter, COLUMNS};
use csv::WriterBuilder;
use std::path::Path;

/// Exporter producing comma-separated values
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn export(&self, records: &[PageRecord], destination: &Path) -> ExportResult<()> {
        // The header is written by hand so an empty crawl still gets one
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(destination)?;

        writer.write_record(COLUMNS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(title: &str, url: &str, text: &str) -> PageRecord {
        PageRecord {
            title: title.to_string(),
            url: url.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_empty_export_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.csv");

        CsvExporter.export(&[], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Page Title,Page URL,Page Content\n");
    }

    #[test]
    fn test_rows_follow_input_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.csv");
        let records = vec![
            record("Home", "http://seed.test", "Hello"),
            record("A", "http://a.test", "World"),
        ];

        CsvExporter.export(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Page Title,Page URL,Page Content\n\
             Home,http://seed.test,Hello\n\
             A,http://a.test,World\n"
        );
    }

    #[test]
    fn test_fields_are_quoted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.csv");
        let records = vec![record("Fish, Chips", "http://a.test", "He said \"hi\"\nthen left")];

        CsvExporter.export(&records, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), COLUMNS.to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "Fish, Chips");
        assert_eq!(&rows[0][2], "He said \"hi\"\nthen left");
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.csv");
        std::fs::write(&path, "stale content that is much longer than the new file\n").unwrap();

        let records = vec![record("A", "http://a.test", "")];
        CsvExporter.export(&records, &path).unwrap();
        let first = std::fs::read(&path).unwrap();

        CsvExporter.export(&records, &path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            String::from_utf8(first).unwrap(),
            "Page Title,Page URL,Page Content\nA,http://a.test,\n"
        );
    }
}
