//! Crawler coordinator - one-level crawl orchestration
//!
//! The coordinator walks exactly two phases:
//! - Fetch the seed page and collect its outbound links
//! - Produce a record for the seed, then for every collected link in order
//!
//! Links found on linked pages are never followed, and nothing is
//! deduplicated: a link that appears twice is fetched twice. A page whose
//! fetch fails is left out of the records and noted in the report's
//! skipped list.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, FetchError, Fetcher};
use crate::crawler::parser::{extract_info, extract_links};
use crate::output::export_records;
use crate::GleanerError;
use serde::Serialize;

/// Normalized record for one successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    /// Page title, or the "No Title" placeholder
    pub title: String,

    /// The URL the page was fetched from
    pub url: String,

    /// Joined paragraph text, possibly empty
    pub text: String,
}

/// A page that produced no record
#[derive(Debug)]
pub struct SkippedPage {
    /// The URL that was attempted
    pub url: String,

    /// Why the fetch failed
    pub error: FetchError,
}

/// Outcome of one crawl run
#[derive(Debug, Default)]
pub struct CrawlReport {
    /// Records in crawl order: seed first, then links in discovery order
    pub records: Vec<PageRecord>,

    /// Pages that were attempted but not recorded, in crawl order
    pub skipped: Vec<SkippedPage>,
}

/// One-level crawl driver
pub struct Coordinator {
    seed_url: String,
    fetcher: Fetcher,
}

impl Coordinator {
    /// Creates a coordinator for `seed_url` using the given fetcher
    pub fn new(seed_url: impl Into<String>, fetcher: Fetcher) -> Self {
        Self {
            seed_url: seed_url.into(),
            fetcher,
        }
    }

    /// Creates a coordinator from the crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(GleanerError)` - The HTTP client could not be built
    pub fn from_config(config: &Config) -> Result<Self, GleanerError> {
        let client = build_http_client(config.crawl.user_agent.as_deref())?;
        Ok(Self::new(config.crawl.seed_url.clone(), Fetcher::new(client)))
    }

    /// The seed URL this coordinator starts from
    pub fn seed_url(&self) -> &str {
        &self.seed_url
    }

    /// Runs the crawl
    ///
    /// Fetch failures never abort the run. Every discovered link is
    /// attempted exactly once per occurrence.
    pub async fn run(&self) -> CrawlReport {
        tracing::info!("Starting crawl from {}", self.seed_url);

        let links = self.discover_links().await;
        tracing::info!("Discovered {} links on seed page", links.len());

        let mut report = CrawlReport::default();

        self.visit(&self.seed_url, &mut report).await;
        for link in &links {
            self.visit(link, &mut report).await;
        }

        tracing::info!(
            "Crawl finished: {} records, {} pages skipped",
            report.records.len(),
            report.skipped.len()
        );

        report
    }

    /// Fetches a page and builds its record
    pub async fn fetch_record(&self, url: &str) -> Result<PageRecord, FetchError> {
        let html = self.fetcher.fetch_page(url).await?;
        let info = extract_info(&html);

        Ok(PageRecord {
            title: info.title,
            url: url.to_string(),
            text: info.text,
        })
    }

    /// Fetches the seed page and returns its links
    async fn discover_links(&self) -> Vec<String> {
        match self.fetcher.fetch_page(&self.seed_url).await {
            Ok(html) => extract_links(&html),
            Err(e) => {
                tracing::warn!("Could not collect links: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetches one page and files the outcome into the report
    async fn visit(&self, url: &str, report: &mut CrawlReport) {
        tracing::debug!("Processing URL: {}", url);

        match self.fetch_record(url).await {
            Ok(record) => report.records.push(record),
            Err(e) => {
                tracing::warn!("Skipping page: {}", e);
                report.skipped.push(SkippedPage {
                    url: url.to_string(),
                    error: e,
                });
            }
        }
    }
}

/// Runs a complete crawl and writes the records to the configured output
///
/// # Returns
///
/// * `Ok(CrawlReport)` - The crawl ran and the output file was written
/// * `Err(GleanerError)` - The client could not be built or export failed
pub async fn run_crawl(config: &Config) -> Result<CrawlReport, GleanerError> {
    let coordinator = Coordinator::from_config(config)?;
    let report = coordinator.run().await;

    export_records(&report.records, &config.output)?;
    tracing::info!(
        "Wrote {} records to {}",
        report.records.len(),
        config.output.path.display()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fetcher() -> Fetcher {
        Fetcher::new(build_http_client(None).unwrap())
    }

    #[test]
    fn test_coordinator_keeps_seed() {
        let coordinator = Coordinator::new("http://example.com", test_fetcher());
        assert_eq!(coordinator.seed_url(), "http://example.com");
    }

    #[tokio::test]
    async fn test_unreachable_seed_yields_empty_report() {
        let coordinator = Coordinator::new("not a url", test_fetcher());
        let report = coordinator.run().await;

        assert!(report.records.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].url, "not a url");
        assert!(matches!(
            report.skipped[0].error,
            FetchError::Transport { .. }
        ));
    }
}
