use serde::Deserialize;

/// Site scraped when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://quotes.toscrape.com/";

/// CSV file written when no output path is configured
pub const DEFAULT_CSV_PATH: &str = "quotes.csv";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Pagination behavior
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// First listing page; next-page links are resolved against it
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Stop after this many pages even if a next-page link exists
    #[serde(rename = "max-pages", default)]
    pub max_pages: Option<u32>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_pages: None,
        }
    }
}

/// CSS selectors describing the listing markup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// One quote-bearing element per quotation
    pub quote: String,

    /// Quotation body, relative to the quote element
    pub text: String,

    /// Author name, relative to the quote element
    pub author: String,

    /// Each tag, relative to the quote element
    pub tag: String,

    /// Anchor of the next-page control
    pub next: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            quote: ".quote".to_string(),
            text: ".text".to_string(),
            author: ".author".to_string(),
            tag: ".tag".to_string(),
            next: ".next > a".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV file
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_csv_path() -> String {
    DEFAULT_CSV_PATH.to_string()
}
