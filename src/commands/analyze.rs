//! Word analysis command
//!
//! Reports whether a word is playable, its power letter by letter, and the
//! other words its letters spell.

use crate::core::normalize_word;
use crate::engine::WordEngine;
use anyhow::{Context, Result};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub valid: bool,
    pub power: u32,
    /// Each letter with its power, in word order
    pub breakdown: Vec<(char, u32)>,
    /// Other dictionary words spellable from the same letters, strongest first
    pub related: Vec<(String, u32)>,
}

/// Analyze a single word
///
/// # Errors
///
/// Returns an error if the word is empty, too long, or not made of letters.
pub fn analyze_word(word: &str, engine: WordEngine<'_>) -> Result<AnalysisResult> {
    let word = normalize_word(word).with_context(|| format!("cannot analyze '{word}'"))?;

    let table = engine.table();
    let breakdown: Vec<(char, u32)> = word.chars().map(|c| (c, table.power_of(c))).collect();
    let letters: Vec<char> = word.chars().collect();
    let related = engine
        .ranked_words(&letters)
        .into_iter()
        .filter(|(w, _)| *w != word)
        .collect();

    Ok(AnalysisResult {
        valid: engine.is_valid_word(&word),
        power: engine.calculate_power(&word),
        word,
        breakdown,
        related,
    })
}
