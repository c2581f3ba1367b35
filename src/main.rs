//! Quote-Scraper main entry point
//!
//! This is the command-line interface for the quotation scraper.

use anyhow::Context;
use clap::Parser;
use quote_scraper::config::{load_config_or_default, validate, Config};
use quote_scraper::crawler::scrape_and_save;
use quote_scraper::output::print_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quote-Scraper: a paginated quotation harvester
///
/// Walks every listing page of a quotation site, following next-page links,
/// and writes each quote's text, author and tags to a CSV file. Without
/// arguments it scrapes https://quotes.toscrape.com/ into ./quotes.csv.
#[derive(Parser, Debug)]
#[command(name = "quote-scraper")]
#[command(version = "1.0.0")]
#[command(about = "A paginated quotation harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// First listing page (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// CSV destination (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Stop after this many pages (overrides the config file)
    #[arg(long, value_name = "N")]
    max_pages: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match resolve_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    match scrape_and_save(&config).await {
        Ok(stats) => {
            if !cli.quiet {
                print_statistics(&stats);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Loads the config file (if any), applies CLI overrides and re-validates
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
    }

    let mut config = load_config_or_default(cli.config.as_deref())
        .context("could not load configuration")?;

    if let Some(base_url) = &cli.base_url {
        config.scraper.base_url = base_url.clone();
    }
    if let Some(output) = &cli.output {
        config.output.csv_path = output.to_string_lossy().into_owned();
    }
    if cli.max_pages.is_some() {
        config.scraper.max_pages = cli.max_pages;
    }

    validate(&config).context("invalid command-line override")?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quote_scraper=info,warn"),
            1 => EnvFilter::new("quote_scraper=debug,info"),
            2 => EnvFilter::new("quote_scraper=trace,debug"),
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

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Quote-Scraper Dry Run ===\n");

    println!("Scraper:");
    println!("  Base URL: {}", config.scraper.base_url);
    match config.scraper.max_pages {
        Some(max) => println!("  Max pages: {}", max),
        None => println!("  Max pages: unlimited"),
    }

    println!("\nSelectors:");
    println!("  Quote: {}", config.selectors.quote);
    println!("  Text: {}", config.selectors.text);
    println!("  Author: {}", config.selectors.author);
    println!("  Tag: {}", config.selectors.tag);
    println!("  Next page: {}", config.selectors.next);

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");
}
