//! Core domain types for Word Slayer
//!
//! Letters, hands and power scoring. Everything here is pure: randomness is
//! always passed in by the caller.

mod hand;
mod power;
mod word;

pub use hand::{HAND_SIZE, Hand, ReplacementPolicy};
pub use power::PowerTable;
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, WordError, normalize_word};
