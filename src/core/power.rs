//! Letter power table
//!
//! Every letter carries a fixed positive weight. A word's power is the sum of
//! its letters' weights.

use rand::Rng;
use std::fmt;

/// Number of letters covered by a power table
pub const ALPHABET_LEN: usize = 26;

/// Reference weights for `a` through `z`
const STANDARD_WEIGHTS: [u32; ALPHABET_LEN] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, // a-j
    5, 1, 3, 1, 1, 3, 10, 1, 1, 1, // k-t
    1, 4, 4, 8, 4, 10, // u-z
];

/// Mapping from each lowercase letter to its power
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerTable {
    weights: [u32; ALPHABET_LEN],
}

impl PowerTable {
    /// The reference table (a=1, b=3, ... q=10, ... z=10)
    pub const STANDARD: Self = Self {
        weights: STANDARD_WEIGHTS,
    };

    /// Power of a single letter
    ///
    /// Case-insensitive. Anything outside `a-z` has zero power.
    #[inline]
    #[must_use]
    pub fn power_of(&self, letter: char) -> u32 {
        index_of(letter).map_or(0, |idx| self.weights[idx])
    }

    /// Sum of the letter powers of `word`
    ///
    /// # Examples
    /// ```
    /// use word_slayer::core::PowerTable;
    ///
    /// let table = PowerTable::STANDARD;
    /// assert_eq!(table.calculate_power("cat"), 5);
    /// assert_eq!(table.calculate_power("QUIZ"), 22);
    /// assert_eq!(table.calculate_power(""), 0);
    /// ```
    #[must_use]
    pub fn calculate_power(&self, word: &str) -> u32 {
        word.chars().map(|c| self.power_of(c)).sum()
    }

    /// The table's key set, `a` through `z`
    pub fn letters(&self) -> impl Iterator<Item = char> {
        (0..ALPHABET_LEN).map(letter_at)
    }

    /// Draw one letter uniformly from the key set
    pub fn random_letter<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        letter_at(rng.random_range(0..ALPHABET_LEN))
    }
}

impl Default for PowerTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for PowerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, weight) in self.weights.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={weight}", letter_at(idx))?;
        }
        Ok(())
    }
}

#[inline]
fn index_of(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    lower
        .is_ascii_lowercase()
        .then(|| (lower as u8 - b'a') as usize)
}

#[inline]
fn letter_at(idx: usize) -> char {
    (b'a' + idx as u8) as char
}
