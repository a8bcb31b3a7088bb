//! Game session layer
//!
//! [`Battle`] ties the stateless engine to a running game: it owns the hands,
//! hit points, log and random source that the presentation layers display.

pub mod battle;
pub mod config;

pub use battle::{Battle, LogEntry, LogKind, RoundPhase, TurnReport};
pub use config::GameConfig;
