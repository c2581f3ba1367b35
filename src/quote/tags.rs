//! Tag-list literal rendering and parsing
//!
//! The `tags` column stores a bracketed list literal such as
//! `['love', 'life']`. Items are single-quoted unless they contain a single
//! quote and no double quote. Backslashes, the enclosing quote character and
//! the `\n`, `\r`, `\t` control characters are backslash-escaped.

use std::iter::Peekable;
use std::str::CharIndices;
use thiserror::Error;

/// Errors produced when reading a tag-list literal back
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagListError {
    #[error("Tag list must start with '['")]
    MissingOpenBracket,

    #[error("Unexpected character '{found}' at byte {position}")]
    UnexpectedChar { position: usize, found: char },

    #[error("Tag list ended before ']'")]
    UnexpectedEnd,

    #[error("Unterminated tag string starting at byte {position}")]
    UnterminatedString { position: usize },

    #[error("Unexpected input after ']' at byte {position}")]
    TrailingInput { position: usize },
}

/// Renders tags as a list literal
///
/// # Example
///
/// ```
/// use quote_scraper::quote::render_tags;
///
/// let tags = vec!["love".to_string(), "life".to_string()];
/// assert_eq!(render_tags(&tags), "['love', 'life']");
/// assert_eq!(render_tags(&[]), "[]");
/// ```
pub fn render_tags(tags: &[String]) -> String {
    let mut out = String::from("[");
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        render_item(tag, &mut out);
    }
    out.push(']');
    out
}

fn render_item(tag: &str, out: &mut String) {
    let quote = if tag.contains('\'') && !tag.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in tag.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Parses a list literal produced by [`render_tags`] back into its tags
///
/// Surrounding whitespace and a trailing comma before `]` are accepted.
pub fn parse_tags(literal: &str) -> Result<Vec<String>, TagListError> {
    let mut chars = literal.trim().char_indices().peekable();

    match chars.next() {
        Some((_, '[')) => {}
        _ => return Err(TagListError::MissingOpenBracket),
    }

    let mut tags = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        match chars.next() {
            Some((_, ']')) => break,
            Some((position, quote @ ('\'' | '"'))) => {
                tags.push(parse_item(&mut chars, quote, position)?);
                skip_whitespace(&mut chars);
                match chars.next() {
                    Some((_, ',')) => continue,
                    Some((_, ']')) => break,
                    Some((position, found)) => {
                        return Err(TagListError::UnexpectedChar { position, found })
                    }
                    None => return Err(TagListError::UnexpectedEnd),
                }
            }
            Some((position, found)) => {
                return Err(TagListError::UnexpectedChar { position, found })
            }
            None => return Err(TagListError::UnexpectedEnd),
        }
    }

    skip_whitespace(&mut chars);
    if let Some((position, _)) = chars.next() {
        return Err(TagListError::TrailingInput { position });
    }

    Ok(tags)
}

fn parse_item(
    chars: &mut Peekable<CharIndices<'_>>,
    quote: char,
    start: usize,
) -> Result<String, TagListError> {
    let mut item = String::new();
    while let Some((_, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, 'n')) => item.push('\n'),
                Some((_, 'r')) => item.push('\r'),
                Some((_, 't')) => item.push('\t'),
                Some((_, escaped @ ('\\' | '\'' | '"'))) => item.push(escaped),
                Some((_, other)) => {
                    item.push('\\');
                    item.push(other);
                }
                None => break,
            },
            c if c == quote => return Ok(item),
            c => item.push(c),
        }
    }
    Err(TagListError::UnterminatedString { position: start })
}

fn skip_whitespace(chars: &mut Peekable<CharIndices<'_>>) {
    while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
}
