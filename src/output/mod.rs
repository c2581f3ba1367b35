//! Output module for persisting scraped quotes
//!
//! This module handles:
//! - Writing the quote sequence to a CSV file
//! - Summarizing a completed run

mod csv_output;
pub mod stats;
mod traits;

pub use csv_output::{CsvOutput, CSV_HEADER};
pub use stats::{print_statistics, ScrapeStatistics};
pub use traits::{OutputError, OutputResult, QuoteWriter};
