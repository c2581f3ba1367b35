//! Configuration module
//!
//! Every section of the TOML file is optional; an absent file means the
//! default site, the default selectors and `quotes.csv`.
//!
//! # Example
//!
//! ```no_run
//! use quote_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Scraping from: {}", config.scraper.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, OutputConfig, ScraperConfig, SelectorConfig, DEFAULT_BASE_URL, DEFAULT_CSV_PATH,
};

// Re-export parser and validation functions
pub use parser::{load_config, load_config_or_default};
pub use validation::validate;

pub(crate) use validation::parse_selector;
