//! Page-Gleaner main entry point
//!
//! This is the command-line interface for the page-gleaner harvester.

use anyhow::Context;
use clap::Parser;
use page_gleaner::config::{resolve_config, Config, ConfigOverrides, OutputFormat};
use page_gleaner::crawler::run_crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Page-Gleaner: a one-level page harvester
///
/// Fetches a seed page, visits every absolute link on it once, and writes
/// the title, URL and paragraph text of each page to a table.
#[derive(Parser, Debug)]
#[command(name = "page-gleaner")]
#[command(version)]
#[command(about = "A one-level page harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Seed URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    seed: Option<String>,

    /// Output file (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output format; inferred from the output extension when omitted
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let overrides = ConfigOverrides {
        seed_url: cli.seed.clone(),
        output_path: cli.output.clone(),
        format: cli.format,
    };
    let config = resolve_config(cli.config.as_deref(), &overrides)
        .context("Failed to load configuration")?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let report = run_crawl(&config).await.context("Crawl failed")?;
    tracing::info!(
        "Done: {} records written, {} pages skipped",
        report.records.len(),
        report.skipped.len()
    );
    for skipped in &report.skipped {
        tracing::debug!("Skipped {}: {}", skipped.url, skipped.error);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_gleaner=info,warn"),
            1 => EnvFilter::new("page_gleaner=debug,info"),
            2 => EnvFilter::new("page_gleaner=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config) {
    println!("=== Page-Gleaner Dry Run ===\n");

    println!("Crawl:");
    println!("  Seed URL: {}", config.crawl.seed_url);
    println!(
        "  User agent: {}",
        config.crawl.user_agent.as_deref().unwrap_or("(client default)")
    );

    println!("\nOutput:");
    println!("  Path: {}", config.output.path.display());
    println!("  Format: {:?}", config.output.resolved_format());

    println!("\n✓ Configuration is valid");
}
