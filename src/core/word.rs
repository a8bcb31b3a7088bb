//! Candidate word normalization
//!
//! Words are transient inputs to the engine. This module turns raw user input
//! into the canonical lowercase form every other component expects.

use thiserror::Error;

/// Longest word a hand can spell
pub const MAX_WORD_LEN: usize = 7;

/// Shortest word that counts as a play
pub const MIN_WORD_LEN: usize = 2;

/// Error type for malformed word input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word must be at most {max} letters, got {0}", max = MAX_WORD_LEN)]
    TooLong(usize),
    #[error("word must contain only the letters a-z")]
    InvalidCharacters,
}

/// Normalize raw input into a lowercase ASCII word
///
/// Surrounding whitespace is ignored. The result is not checked against any
/// dictionary; short words (a single letter) pass through so the dictionary
/// can reject them.
///
/// # Errors
/// Returns `WordError` if the input:
/// - Is empty after trimming
/// - Is longer than seven letters
/// - Contains anything other than ASCII letters
///
/// # Examples
/// ```
/// use word_slayer::core::normalize_word;
///
/// assert_eq!(normalize_word("  Cat ").unwrap(), "cat");
/// assert!(normalize_word("c4t").is_err());
/// assert!(normalize_word("").is_err());
/// ```
pub fn normalize_word(input: &str) -> Result<String, WordError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(WordError::Empty);
    }

    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(WordError::InvalidCharacters);
    }

    // ASCII only past this point, so byte length is letter count
    if trimmed.len() > MAX_WORD_LEN {
        return Err(WordError::TooLong(trimmed.len()));
    }

    Ok(trimmed.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_word("CAT").unwrap(), "cat");
        assert_eq!(normalize_word("  DoG\n").unwrap(), "dog");
    }

    #[test]
    fn normalize_rejects_empty() {
        assert_eq!(normalize_word(""), Err(WordError::Empty));
        assert_eq!(normalize_word("   "), Err(WordError::Empty));
    }

    #[test]
    fn normalize_rejects_long_words() {
        assert_eq!(normalize_word("absolute"), Err(WordError::TooLong(8)));
    }

    #[test]
    fn normalize_rejects_non_letters() {
        assert_eq!(normalize_word("c4t"), Err(WordError::InvalidCharacters));
        assert_eq!(normalize_word("ca t"), Err(WordError::InvalidCharacters));
        assert_eq!(normalize_word("café"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn normalize_keeps_single_letters() {
        assert_eq!(normalize_word("a").unwrap(), "a");
    }
}
