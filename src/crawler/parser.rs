//! HTML parser for quotation listing pages
//!
//! This module turns one listing page into:
//! - The quotes it lists, in document order
//! - The relative link of the next-page control, if any

use crate::config::{parse_selector, SelectorConfig};
use crate::quote::Quote;
use crate::ConfigError;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Markup-shape mismatches found while extracting quotes
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no element matches '{selector}'")]
    MissingElement { selector: String },

    #[error("element matching '{selector}' has no '{attribute}' attribute")]
    MissingAttribute { selector: String, attribute: String },
}

/// Compiled selectors for a listing page
#[derive(Debug, Clone)]
pub struct QuoteSelectors {
    quote: Selector,
    text: Selector,
    author: Selector,
    tag: Selector,
    next: Selector,
    // Source strings, kept for error messages
    text_source: String,
    author_source: String,
    next_source: String,
}

impl QuoteSelectors {
    /// Compiles the configured selectors
    pub fn from_config(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            quote: parse_selector(&config.quote)?,
            text: parse_selector(&config.text)?,
            author: parse_selector(&config.author)?,
            tag: parse_selector(&config.tag)?,
            next: parse_selector(&config.next)?,
            text_source: config.text.clone(),
            author_source: config.author.clone(),
            next_source: config.next.clone(),
        })
    }
}

/// Everything extracted from one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// Quotes in document order
    pub quotes: Vec<Quote>,

    /// `href` of the next-page control, `None` on the last page
    pub next_href: Option<String>,
}

/// Parses a listing page
///
/// # Arguments
///
/// * `html` - The page body
/// * `selectors` - Compiled listing selectors
///
/// # Returns
///
/// * `Ok(ListingPage)` - Quotes and next-page link
/// * `Err(ExtractError)` - A quote lacks its text or author, or the next-page
///   control has no `href`
///
/// # Example
///
/// ```
/// use quote_scraper::config::SelectorConfig;
/// use quote_scraper::crawler::{parse_listing, QuoteSelectors};
///
/// let html = r#"<div class="quote"><span class="text">Hi</span>
///     <small class="author">Me</small></div>"#;
/// let selectors = QuoteSelectors::from_config(&SelectorConfig::default()).unwrap();
/// let page = parse_listing(html, &selectors).unwrap();
/// assert_eq!(page.quotes.len(), 1);
/// assert_eq!(page.next_href, None);
/// ```
pub fn parse_listing(html: &str, selectors: &QuoteSelectors) -> Result<ListingPage, ExtractError> {
    let document = Html::parse_document(html);

    let quotes = document
        .select(&selectors.quote)
        .map(|node| extract_quote(node, selectors))
        .collect::<Result<Vec<_>, _>>()?;

    let next_href = extract_next_href(&document, selectors)?;

    Ok(ListingPage { quotes, next_href })
}

/// Maps one quote-bearing element to a [`Quote`]
///
/// Text and author are the trimmed text of the first matching descendant.
/// Tags are the trimmed text of every matching descendant, in order.
pub fn extract_quote(node: ElementRef<'_>, selectors: &QuoteSelectors) -> Result<Quote, ExtractError> {
    let text = first_text(node, &selectors.text).ok_or_else(|| ExtractError::MissingElement {
        selector: selectors.text_source.clone(),
    })?;

    let author =
        first_text(node, &selectors.author).ok_or_else(|| ExtractError::MissingElement {
            selector: selectors.author_source.clone(),
        })?;

    let tags = node.select(&selectors.tag).map(element_text).collect();

    Ok(Quote::new(text, author, tags))
}

fn first_text(node: ElementRef<'_>, selector: &Selector) -> Option<String> {
    node.select(selector).next().map(element_text)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Reads the next-page link
fn extract_next_href(
    document: &Html,
    selectors: &QuoteSelectors,
) -> Result<Option<String>, ExtractError> {
    let Some(anchor) = document.select(&selectors.next).next() else {
        return Ok(None);
    };

    anchor
        .value()
        .attr("href")
        .map(|href| Some(href.trim().to_string()))
        .ok_or_else(|| ExtractError::MissingAttribute {
            selector: selectors.next_source.clone(),
            attribute: "href".to_string(),
        })
}
