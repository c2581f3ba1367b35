//! Quote record and its tag-list rendering

mod tags;

pub use tags::{parse_tags, render_tags, TagListError};

/// A single quotation scraped from a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    text: String,
    author: String,
    tags: Vec<String>,
}

impl Quote {
    /// Creates a new quote record
    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }

    /// The quotation body
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The attributed author
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Tags in page order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Tags rendered as a list literal, e.g. `['love', 'life']`
    pub fn tags_literal(&self) -> String {
        render_tags(&self.tags)
    }
}
