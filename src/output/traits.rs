//! Output writer trait and error types

use crate::quote::Quote;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for quote writers
///
/// A writer consumes the full, ordered quote sequence once per run.
pub trait QuoteWriter {
    /// Writes every quote, in order
    ///
    /// # Returns
    ///
    /// The number of data rows written (header excluded)
    fn write_quotes(&self, quotes: &[Quote]) -> OutputResult<usize>;
}
