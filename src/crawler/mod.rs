//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with strict status validation
//! - HTML parsing for titles, paragraph text and links
//! - One-level crawl coordination and export (`run_crawl`)

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{run_crawl, Coordinator, CrawlReport, PageRecord, SkippedPage};
pub use fetcher::{build_http_client, FetchError, Fetcher};
pub use parser::{extract_info, extract_links, PageInfo, NO_TITLE};
