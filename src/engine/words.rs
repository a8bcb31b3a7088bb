//! Word validation, scoring and enumeration

use crate::core::{MIN_WORD_LEN, PowerTable};
use crate::dictionary::Dictionary;
use rustc_hash::FxHashSet;

/// Check whether `word` is a dictionary word (case-insensitive)
///
/// The empty string is never valid.
#[must_use]
pub fn is_valid_word(word: &str, dictionary: &Dictionary) -> bool {
    !word.is_empty() && dictionary.contains(word)
}

/// Sum of per-letter powers; unknown characters count zero
#[must_use]
pub fn calculate_power(word: &str, table: &PowerTable) -> u32 {
    table.calculate_power(word)
}

/// Every dictionary word that can be spelled from `hand`
///
/// Exhaustive backtracking over all orderings of all non-empty subsets of
/// the hand. Hand positions are distinct even when their letters repeat, so
/// a letter is used at most as many times as it appears. Every prefix of two
/// or more letters is looked up; matches collapse into a set.
///
/// Cost grows factorially with hand size. A seven-letter hand visits 13,699
/// prefixes.
///
/// # Examples
/// ```
/// use word_slayer::dictionary::Dictionary;
/// use word_slayer::engine::enumerate_valid_words;
///
/// let dict = Dictionary::load(["cat", "act", "at", "dog"]).unwrap();
/// let words = enumerate_valid_words(&['c', 'a', 't'], &dict);
///
/// assert_eq!(words.len(), 3);
/// assert!(!words.contains("dog"));
/// ```
#[must_use]
pub fn enumerate_valid_words(hand: &[char], dictionary: &Dictionary) -> FxHashSet<String> {
    let letters: Vec<char> = hand.iter().map(char::to_ascii_lowercase).collect();
    let mut used = vec![false; letters.len()];
    let mut prefix = String::with_capacity(letters.len());
    let mut results = FxHashSet::default();

    backtrack(&letters, &mut used, &mut prefix, 0, dictionary, &mut results);

    tracing::trace!(
        hand = %letters.iter().collect::<String>(),
        found = results.len(),
        "enumerated words"
    );
    results
}

fn backtrack(
    letters: &[char],
    used: &mut [bool],
    prefix: &mut String,
    depth: usize,
    dictionary: &Dictionary,
    results: &mut FxHashSet<String>,
) {
    if depth >= MIN_WORD_LEN
        && !results.contains(prefix.as_str())
        && dictionary.contains(prefix.as_str())
    {
        results.insert(prefix.clone());
    }

    for i in 0..letters.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        prefix.push(letters[i]);

        backtrack(letters, used, prefix, depth + 1, dictionary, results);

        prefix.pop();
        used[i] = false;
    }
}

/// Bundles a dictionary and power table for the engine operations
#[derive(Debug, Clone, Copy)]
pub struct WordEngine<'a> {
    dictionary: &'a Dictionary,
    table: &'a PowerTable,
}

impl<'a> WordEngine<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, table: &'a PowerTable) -> Self {
        Self { dictionary, table }
    }

    #[must_use]
    pub const fn table(&self) -> &'a PowerTable {
        self.table
    }

    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        is_valid_word(word, self.dictionary)
    }

    #[must_use]
    pub fn calculate_power(&self, word: &str) -> u32 {
        calculate_power(word, self.table)
    }

    #[must_use]
    pub fn enumerate_valid_words(&self, hand: &[char]) -> FxHashSet<String> {
        enumerate_valid_words(hand, self.dictionary)
    }

    /// Playable words with their power, strongest first
    ///
    /// Ties in power are broken alphabetically so the listing is stable.
    #[must_use]
    pub fn ranked_words(&self, hand: &[char]) -> Vec<(String, u32)> {
        let mut ranked: Vec<(String, u32)> = self
            .enumerate_valid_words(hand)
            .into_iter()
            .map(|word| {
                let power = self.calculate_power(&word);
                (word, power)
            })
            .collect();

        ranked.sort_unstable_by(|(a_word, a_power), (b_word, b_power)| {
            b_power.cmp(a_power).then_with(|| a_word.cmp(b_word))
        });
        ranked
    }
}
