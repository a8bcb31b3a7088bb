//! Dictionary of playable words
//!
//! An immutable hash set of lowercase words between two and seven letters,
//! with an embedded default list compiled into the binary.

mod embedded;
pub mod loader;

use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN};
use rustc_hash::FxHashSet;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use embedded::{WORDS, WORDS_COUNT};

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary has no words of {min} to {max} letters", min = MIN_WORD_LEN, max = MAX_WORD_LEN)]
    Empty,
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Set of valid words
///
/// Built once at startup and never modified. Lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from a sequence of words
    ///
    /// Entries are trimmed and lowercased; only entries of 2 to 7 letters
    /// are kept.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no entry survives the filter. An
    /// empty dictionary means the game is misconfigured.
    ///
    /// # Examples
    /// ```
    /// use word_slayer::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::load(["cat", "dog", "a", "elephants"]).unwrap();
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("CAT"));
    /// assert!(!dict.contains("a"));
    /// ```
    pub fn load<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&w.chars().count()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        tracing::debug!(words = words.len(), "dictionary loaded");
        Ok(Self { words })
    }

    /// Build the dictionary compiled into the binary
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the embedded list was built empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::load(WORDS)
    }

    /// Check whether `word` is in the dictionary (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(word.to_lowercase().as_str())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a successfully loaded dictionary
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
