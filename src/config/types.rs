use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure for page-gleaner
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub output: OutputConfig,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// The page the crawl starts from
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default)]
    pub user_agent: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Destination file, overwritten on every run
    pub path: PathBuf,

    /// Table format; inferred from the path extension when absent
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl OutputConfig {
    /// Returns the format to write, falling back to the path extension
    pub fn resolved_format(&self) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from_path(&self.path))
    }
}

/// Supported table formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// SQLite database with a single `pages` table
    Sqlite,
    /// Excel workbook with one worksheet
    Xlsx,
}

impl OutputFormat {
    /// Infers the format from a file extension
    ///
    /// `.db`, `.sqlite` and `.sqlite3` select SQLite, `.xlsx` selects a
    /// workbook; anything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("db" | "sqlite" | "sqlite3") => Self::Sqlite,
            Some("xlsx") => Self::Xlsx,
            _ => Self::Csv,
        }
    }
}

/// Values supplied on the command line that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub seed_url: Option<String>,
    pub output_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl ConfigOverrides {
    /// Writes every present override into `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(seed_url) = &self.seed_url {
            config.crawl.seed_url = seed_url.clone();
        }
        if let Some(path) = &self.output_path {
            config.output.path = path.clone();
        }
        if let Some(format) = self.format {
            config.output.format = Some(format);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("out.csv")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("out.db")), OutputFormat::Sqlite);
        assert_eq!(
            OutputFormat::from_path(Path::new("out.SQLITE3")),
            OutputFormat::Sqlite
        );
        assert_eq!(OutputFormat::from_path(Path::new("out")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("out.xlsx")), OutputFormat::Xlsx);
        assert_eq!(
            OutputFormat::from_path(Path::new("Path_to_file/file_name.XLSX")),
            OutputFormat::Xlsx
        );
        assert_eq!(OutputFormat::from_path(Path::new("out.xls")), OutputFormat::Csv);
    }

    #[test]
    fn test_explicit_format_wins() {
        let output = OutputConfig {
            path: PathBuf::from("pages.db"),
            format: Some(OutputFormat::Csv),
        };
        assert_eq!(output.resolved_format(), OutputFormat::Csv);
    }
}
