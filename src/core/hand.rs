//! Seven-letter hands
//!
//! A hand is an ordered sequence of letters drawn from the power table's key
//! set. Duplicates are allowed.

use super::power::PowerTable;
use rand::Rng;
use std::fmt;

/// Number of letters in a hand
///
/// The word search explores every ordering of every subset of the hand, so
/// this is a complexity bound as much as a game rule.
pub const HAND_SIZE: usize = 7;

/// How used letters are refreshed after a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplacementPolicy {
    /// Redraw every position whose letter appears anywhere in the word.
    /// Unused duplicates of a played letter are redrawn too.
    #[default]
    ByValue,
    /// Each letter of the word consumes one matching position; only
    /// consumed positions are redrawn.
    ByPosition,
}

impl ReplacementPolicy {
    /// Parse a policy name: "value" or "position"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "value" | "by-value" => Some(Self::ByValue),
            "position" | "by-position" | "index" => Some(Self::ByPosition),
            _ => None,
        }
    }
}

/// A hand of exactly seven letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    letters: [char; HAND_SIZE],
}

impl Hand {
    /// Build a hand from explicit letters
    ///
    /// Letters are lowercased.
    #[must_use]
    pub fn from_letters(letters: [char; HAND_SIZE]) -> Self {
        Self {
            letters: letters.map(|c| c.to_ascii_lowercase()),
        }
    }

    /// Deal a fresh hand
    ///
    /// Each slot is an independent uniform draw (with replacement) from the
    /// table's letters.
    pub fn generate<R: Rng + ?Sized>(table: &PowerTable, rng: &mut R) -> Self {
        Self {
            letters: std::array::from_fn(|_| table.random_letter(rng)),
        }
    }

    /// The letters in hand order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; HAND_SIZE] {
        &self.letters
    }

    /// Redraw every position whose letter occurs in `used_word`
    ///
    /// Matching is by letter value, not position: if the hand holds two `e`s
    /// and the word used one, both are redrawn. Positions whose letter does
    /// not occur in the word are kept. Redraws happen left to right.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_slayer::core::{Hand, PowerTable};
    ///
    /// let hand = Hand::from_letters(['c', 'a', 't', 'd', 'o', 'g', 'x']);
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let next = hand.replace_used("cat", &PowerTable::STANDARD, &mut rng);
    ///
    /// assert_eq!(&next.letters()[3..], &['d', 'o', 'g', 'x']);
    /// ```
    #[must_use]
    pub fn replace_used<R: Rng + ?Sized>(
        &self,
        used_word: &str,
        table: &PowerTable,
        rng: &mut R,
    ) -> Self {
        let used = used_word.to_ascii_lowercase();
        let mut letters = self.letters;
        for letter in &mut letters {
            if used.contains(*letter) {
                *letter = table.random_letter(rng);
            }
        }
        Self { letters }
    }

    /// Redraw only the positions consumed by spelling `used_word`
    ///
    /// Each letter of the word claims the leftmost unclaimed position holding
    /// that letter. Letters of the word not found in the hand claim nothing.
    #[must_use]
    pub fn replace_consumed<R: Rng + ?Sized>(
        &self,
        used_word: &str,
        table: &PowerTable,
        rng: &mut R,
    ) -> Self {
        let consumed = self.consumed_positions(used_word);
        let mut letters = self.letters;
        for (letter, _) in letters
            .iter_mut()
            .zip(consumed)
            .filter(|(_, was_used)| *was_used)
        {
            *letter = table.random_letter(rng);
        }
        Self { letters }
    }

    /// Refresh the hand according to `policy`
    #[must_use]
    pub fn replace<R: Rng + ?Sized>(
        &self,
        used_word: &str,
        policy: ReplacementPolicy,
        table: &PowerTable,
        rng: &mut R,
    ) -> Self {
        match policy {
            ReplacementPolicy::ByValue => self.replace_used(used_word, table, rng),
            ReplacementPolicy::ByPosition => self.replace_consumed(used_word, table, rng),
        }
    }

    /// Check whether `word` can be spelled from this hand
    ///
    /// Each hand letter may be used at most once.
    #[must_use]
    pub fn can_form(&self, word: &str) -> bool {
        self.missing_letters(word).is_empty()
    }

    /// Letters of `word` the hand cannot supply (respecting multiplicity)
    #[must_use]
    pub fn missing_letters(&self, word: &str) -> Vec<char> {
        let mut available = self.letters.to_vec();
        let mut missing = Vec::new();

        for ch in word.chars().map(|c| c.to_ascii_lowercase()) {
            if let Some(pos) = available.iter().position(|&c| c == ch) {
                available.swap_remove(pos);
            } else {
                missing.push(ch);
            }
        }

        missing
    }

    fn consumed_positions(&self, word: &str) -> [bool; HAND_SIZE] {
        let mut consumed = [false; HAND_SIZE];
        for ch in word.chars().map(|c| c.to_ascii_lowercase()) {
            if let Some(pos) = (0..HAND_SIZE).find(|&i| !consumed[i] && self.letters[i] == ch) {
                consumed[pos] = true;
            }
        }
        consumed
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", letter.to_ascii_uppercase())?;
        }
        Ok(())
    }
}
