//! Word engine and round resolution
//!
//! Stateless functions over a dictionary, a power table and a caller-owned
//! `BattleState`. Callers sequence rounds and own all mutation.

mod resolver;
mod state;
mod words;

pub use resolver::{RejectReason, RoundOutcome, RoundResolver, RoundResult, TieRule, Winner};
pub use state::{BattleState, Side};
pub use words::{WordEngine, calculate_power, enumerate_valid_words, is_valid_word};
