//! Quote collection loading and random selection.
//!
//! The collection is a JSON array of records:
//!
//! ```json
//! [
//!   { "quote": "Stay hungry || stay foolish", "author": "Jobs" },
//!   { "quote": "Less, but better" }
//! ]
//! ```
//!
//! `quote` is required; `author` is optional. A literal `||` inside the quote
//! text is a forced line break consumed by [`crate::wrap`].
//!
//! Every failure here is fatal: a wallpaper with no quote is not a wallpaper.
//! An empty collection is raised as its own error rather than left to fail
//! obscurely at selection time.

use rand::seq::SliceRandom;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Quote file parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Quote collection is empty: {0}")]
    EmptyCollection(PathBuf),
}

/// A single quote record. Immutable once selected.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Quote {
    pub quote: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl Quote {
    /// Author credit as drawn on the wallpaper: `~ Name`, or empty when the
    /// record has no author (an empty string draws nothing).
    pub fn attribution(&self) -> String {
        match &self.author {
            Some(author) => format!("~ {author}"),
            None => String::new(),
        }
    }
}

/// Load and validate the quote collection.
///
/// Missing file, malformed JSON, and an empty array are all fatal.
pub fn load_quotes(path: &Path) -> Result<Vec<Quote>, QuoteError> {
    let content = fs::read_to_string(path)?;
    let quotes: Vec<Quote> = serde_json::from_str(&content)?;
    if quotes.is_empty() {
        return Err(QuoteError::EmptyCollection(path.to_path_buf()));
    }
    Ok(quotes)
}

/// Load the collection and return one quote, selected uniformly at random.
pub fn random_quote(path: &Path) -> Result<Quote, QuoteError> {
    let quotes = load_quotes(path)?;
    let mut rng = rand::thread_rng();
    quotes
        .choose(&mut rng)
        .cloned()
        .ok_or_else(|| QuoteError::EmptyCollection(path.to_path_buf()))
}
