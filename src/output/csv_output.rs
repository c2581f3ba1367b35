//! CSV writer for scraped quotes
//!
//! Produces a header row `text,author,tags` followed by one row per quote.
//! The `tags` column holds the list literal from [`Quote::tags_literal`].

use crate::output::traits::{OutputResult, QuoteWriter};
use crate::quote::Quote;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Column names of the header row
pub const CSV_HEADER: [&str; 3] = ["text", "author", "tags"];

/// Writes quotes to a CSV file, truncating any existing file
#[derive(Debug, Clone)]
pub struct CsvOutput {
    path: PathBuf,
}

impl CsvOutput {
    /// Creates a writer for the given destination
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuoteWriter for CsvOutput {
    fn write_quotes(&self, quotes: &[Quote]) -> OutputResult<usize> {
        let file = File::create(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);

        writer.write_record(CSV_HEADER)?;
        for quote in quotes {
            let tags = quote.tags_literal();
            writer.write_record([quote.text(), quote.author(), tags.as_str()])?;
        }
        writer.flush()?;

        tracing::debug!(
            "Wrote {} rows to {}",
            quotes.len() + 1,
            self.path.display()
        );
        Ok(quotes.len())
    }
}
