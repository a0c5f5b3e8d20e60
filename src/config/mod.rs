//! Configuration module for page-gleaner
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, and merging command-line overrides on top of them.
//!
//! # Example
//!
//! ```no_run
//! use page_gleaner::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("gleaner.toml")).unwrap();
//! println!("Crawl will start at: {}", config.crawl.seed_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ConfigOverrides, CrawlConfig, OutputConfig, OutputFormat};

// Re-export parser functions
pub use parser::{load_config, parse_config, resolve_config};
