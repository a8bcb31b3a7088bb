//! Word listing command
//!
//! Lists every dictionary word a set of letters can spell, strongest first.

use crate::core::HAND_SIZE;
use crate::engine::WordEngine;
use anyhow::{Result, bail};

/// Playable words for a set of letters
pub struct WordsResult {
    pub letters: Vec<char>,
    /// Words with their power, strongest first
    pub words: Vec<(String, u32)>,
}

impl WordsResult {
    /// The strongest word, if any
    #[must_use]
    pub fn best(&self) -> Option<&(String, u32)> {
        self.words.first()
    }
}

/// Rank every word spellable from `letters`
///
/// # Errors
///
/// Returns an error if `letters` is empty, longer than a hand, or contains
/// anything other than ASCII letters.
pub fn list_words(letters: &str, engine: WordEngine<'_>) -> Result<WordsResult> {
    let letters: Vec<char> = letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if letters.is_empty() {
        bail!("no letters given");
    }
    if letters.len() > HAND_SIZE {
        bail!("at most {HAND_SIZE} letters allowed, got {}", letters.len());
    }
    if let Some(bad) = letters.iter().find(|c| !c.is_ascii_lowercase()) {
        bail!("'{bad}' is not a letter");
    }

    let words = engine.ranked_words(&letters);
    tracing::debug!(count = words.len(), "listed words");

    Ok(WordsResult { letters, words })
}
