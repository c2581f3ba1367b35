//! Crawler module for listing-page fetching and quote extraction
//!
//! This module contains the scraping pipeline:
//! - HTTP fetching of listing pages
//! - HTML parsing and quote extraction
//! - Next-page traversal
//! - The fetch-then-write entry point used by the CLI

mod fetcher;
mod paginator;
mod parser;

pub use fetcher::{build_http_client, Fetcher};
pub use paginator::{Paginator, ScrapeOutcome};
pub use parser::{extract_quote, parse_listing, ExtractError, ListingPage, QuoteSelectors};

use crate::config::Config;
use crate::output::{CsvOutput, QuoteWriter, ScrapeStatistics};
use crate::ScrapeError;
use chrono::Utc;
use std::path::Path;

/// Scrapes every listing page and writes the quotes to the configured CSV
///
/// The CSV file is only created once every page has been scraped; a failure
/// on any page leaves the destination untouched.
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(ScrapeStatistics)` - Summary of the completed run
/// * `Err(ScrapeError)` - Fetching, parsing or writing failed
///
/// # Example
///
/// ```no_run
/// use quote_scraper::config::Config;
/// use quote_scraper::crawler::scrape_and_save;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let stats = scrape_and_save(&Config::default()).await?;
/// println!("{} quotes", stats.total_quotes);
/// # Ok(())
/// # }
/// ```
pub async fn scrape_and_save(config: &Config) -> Result<ScrapeStatistics, ScrapeError> {
    let started_at = Utc::now();

    let paginator = Paginator::new(config)?;
    tracing::info!("Scraping quotes from {}", paginator.base_url());
    let outcome = paginator.run().await?;

    let writer = CsvOutput::new(Path::new(&config.output.csv_path));
    let rows = writer.write_quotes(&outcome.quotes)?;
    tracing::info!("Wrote {} quotes to {}", rows, config.output.csv_path);

    Ok(ScrapeStatistics::from_outcome(&outcome, started_at, Utc::now()))
}
