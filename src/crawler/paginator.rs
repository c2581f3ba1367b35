//! Pagination loop
//!
//! Fetches the base page, then follows next-page links until a page without
//! one is reached. Each page is parsed and its document dropped before the
//! next request, so exactly one request is in flight at a time.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, Fetcher};
use crate::crawler::parser::{parse_listing, QuoteSelectors};
use crate::quote::Quote;
use crate::ScrapeError;
use std::collections::HashSet;
use url::Url;

/// Result of walking every listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeOutcome {
    /// Quotes in encounter order: page 1 top to bottom, then page 2, ...
    pub quotes: Vec<Quote>,

    /// Number of pages fetched
    pub pages_visited: u32,
}

/// Walks the paginated listing starting at a base URL
pub struct Paginator {
    base_url: Url,
    selectors: QuoteSelectors,
    fetcher: Fetcher,
    max_pages: Option<u32>,
}

impl Paginator {
    /// Creates a paginator from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Paginator)` - Ready to run
    /// * `Err(ScrapeError)` - Invalid base URL or selector, or the HTTP client
    ///   could not be built
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let base_url = Url::parse(&config.scraper.base_url)?;
        let selectors = QuoteSelectors::from_config(&config.selectors)?;
        let fetcher = Fetcher::new(build_http_client()?);

        Ok(Self {
            base_url,
            selectors,
            fetcher,
            max_pages: config.scraper.max_pages,
        })
    }

    /// The first listing page
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Runs the pagination loop
    ///
    /// Any fetch or markup error aborts the whole run; quotes from pages
    /// already visited are discarded with it.
    pub async fn run(&self) -> Result<ScrapeOutcome, ScrapeError> {
        let mut visited: HashSet<Url> = HashSet::new();
        let mut current = self.base_url.clone();
        let mut quotes = Vec::new();
        let mut pages_visited: u32 = 0;

        loop {
            visited.insert(current.clone());

            let body = self.fetcher.fetch(&current).await?;
            let listing =
                parse_listing(&body, &self.selectors).map_err(|source| ScrapeError::Extract {
                    url: current.to_string(),
                    source,
                })?;

            pages_visited += 1;
            tracing::info!("Page {}", pages_visited);
            tracing::debug!("{} quotes on {}", listing.quotes.len(), current);

            quotes.extend(listing.quotes);

            let Some(href) = listing.next_href else {
                tracing::debug!("No next-page link on {}, stopping", current);
                break;
            };

            if self.max_pages.is_some_and(|max| pages_visited >= max) {
                tracing::warn!(
                    "Reached max-pages limit ({}), not following {}",
                    pages_visited,
                    href
                );
                break;
            }

            let next = self.base_url.join(&href)?;
            if visited.contains(&next) {
                return Err(ScrapeError::PaginationCycle {
                    url: next.to_string(),
                });
            }
            current = next;
        }

        tracing::info!(
            "Collected {} quotes from {} pages",
            quotes.len(),
            pages_visited
        );

        Ok(ScrapeOutcome {
            quotes,
            pages_visited,
        })
    }

    /// Runs the pagination loop and returns only the quotes
    pub async fn scrape_quotes(&self) -> Result<Vec<Quote>, ScrapeError> {
        Ok(self.run().await?.quotes)
    }
}
