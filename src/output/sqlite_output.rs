//! SQLite exporter
//!
//! Writes the records into a fresh database holding a single `pages`
//! table whose columns carry the same names as the CSV header.

use crate::crawler::PageRecord;
use crate::output::traits::{ExportResult, Exporter};
use rusqlite::{params, Connection};
use std::io::ErrorKind;
use std::path::Path;

const CREATE_PAGES_TABLE: &str = r#"
CREATE TABLE pages (
    "Page Title" TEXT NOT NULL,
    "Page URL" TEXT NOT NULL,
    "Page Content" TEXT NOT NULL
)
"#;

const INSERT_PAGE: &str =
    r#"INSERT INTO pages ("Page Title", "Page URL", "Page Content") VALUES (?1, ?2, ?3)"#;

/// Exporter producing a SQLite database
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteExporter;

impl Exporter for SqliteExporter {
    fn export(&self, records: &[PageRecord], destination: &Path) -> ExportResult<()> {
        remove_existing(destination)?;

        let mut conn = Connection::open(destination)?;
        conn.execute_batch(CREATE_PAGES_TABLE)?;

        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT_PAGE)?;
            for record in records {
                stmt.execute(params![record.title, record.url, record.text])?;
            }
        }
        tx.commit()?;

        Ok(())
    }
}

/// Deletes a previous output file so each export starts from an empty database
fn remove_existing(path: &Path) -> std::io::Result<()> {
    match std::fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn load_rows(path: &Path) -> Vec<(String, String, String)> {
        let conn = Connection::open(path).unwrap();
        let mut stmt = conn
            .prepare(r#"SELECT "Page Title", "Page URL", "Page Content" FROM pages ORDER BY rowid"#)
            .unwrap();
        stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
            .unwrap()
            .map(|r| r.unwrap())
            .collect()
    }

    #[test]
    fn test_export_rows_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.db");
        let records = vec![
            PageRecord {
                title: "Home".to_string(),
                url: "http://seed.test".to_string(),
                text: "Hello".to_string(),
            },
            PageRecord {
                title: "A".to_string(),
                url: "http://a.test".to_string(),
                text: "World".to_string(),
            },
        ];

        SqliteExporter.export(&records, &path).unwrap();

        assert_eq!(
            load_rows(&path),
            vec![
                (
                    "Home".to_string(),
                    "http://seed.test".to_string(),
                    "Hello".to_string()
                ),
                ("A".to_string(), "http://a.test".to_string(), "World".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_export_creates_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.db");

        SqliteExporter.export(&[], &path).unwrap();

        assert!(load_rows(&path).is_empty());
    }

    #[test]
    fn test_export_replaces_previous_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.db");
        let records = vec![PageRecord {
            title: "A".to_string(),
            url: "http://a.test".to_string(),
            text: String::new(),
        }];

        SqliteExporter.export(&records, &path).unwrap();
        SqliteExporter.export(&records, &path).unwrap();

        assert_eq!(load_rows(&path).len(), 1);
    }

    #[test]
    fn test_export_replaces_non_database_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.db");
        std::fs::write(&path, "not a database").unwrap();

        SqliteExporter.export(&[], &path).unwrap();

        assert!(load_rows(&path).is_empty());
    }
}
