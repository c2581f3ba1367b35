//! Run statistics
//!
//! Summarizes a completed scrape for the end-of-run report.

use crate::crawler::ScrapeOutcome;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// Number of tags listed in the report
pub const TOP_TAG_LIMIT: usize = 10;

/// Scrape run summary
#[derive(Debug, Clone)]
pub struct ScrapeStatistics {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run finished
    pub finished_at: DateTime<Utc>,

    /// Number of listing pages fetched
    pub pages_visited: u32,

    /// Number of quotes collected
    pub total_quotes: usize,

    /// Number of distinct authors
    pub unique_authors: usize,

    /// Number of distinct tags
    pub unique_tags: usize,

    /// Quotes carrying no tag at all
    pub untagged_quotes: usize,

    /// Most used tags, by count descending then name ascending
    pub top_tags: Vec<(String, usize)>,
}

impl ScrapeStatistics {
    /// Computes statistics for a finished run
    pub fn from_outcome(
        outcome: &ScrapeOutcome,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let unique_authors = outcome
            .quotes
            .iter()
            .map(|q| q.author())
            .collect::<HashSet<_>>()
            .len();

        let mut tag_counts: HashMap<&str, usize> = HashMap::new();
        for tag in outcome.quotes.iter().flat_map(|q| q.tags()) {
            *tag_counts.entry(tag.as_str()).or_insert(0) += 1;
        }

        let untagged_quotes = outcome
            .quotes
            .iter()
            .filter(|q| q.tags().is_empty())
            .count();

        let mut top_tags: Vec<(String, usize)> = tag_counts
            .iter()
            .map(|(tag, count)| (tag.to_string(), *count))
            .collect();
        top_tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_tags.truncate(TOP_TAG_LIMIT);

        Self {
            started_at,
            finished_at,
            pages_visited: outcome.pages_visited,
            total_quotes: outcome.quotes.len(),
            unique_authors,
            unique_tags: tag_counts.len(),
            untagged_quotes,
            top_tags,
        }
    }

    /// Wall-clock duration of the run in seconds
    pub fn duration_seconds(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &ScrapeStatistics) {
    println!("=== Scrape Statistics ===\n");

    println!("Overview:");
    println!("  Started: {}", stats.started_at.to_rfc3339());
    println!("  Duration: {:.1}s", stats.duration_seconds());
    println!("  Pages visited: {}", stats.pages_visited);
    println!("  Quotes collected: {}", stats.total_quotes);
    println!("  Unique authors: {}", stats.unique_authors);
    println!("  Unique tags: {}", stats.unique_tags);
    println!("  Quotes without tags: {}", stats.untagged_quotes);
    println!();

    if !stats.top_tags.is_empty() {
        println!("Top Tags:");
        for (tag, count) in &stats.top_tags {
            println!("  {}: {}", tag, count);
        }
        println!();
    }
}
