//! Word Slayer
//!
//! A word battle game: both sides spell a word from a seven-letter hand, the
//! stronger word wins and the loser takes the difference in power as damage.
//!
//! # Quick Start
//!
//! ```rust
//! use word_slayer::core::PowerTable;
//! use word_slayer::dictionary::Dictionary;
//! use word_slayer::engine::WordEngine;
//!
//! let dictionary = Dictionary::load(["cat", "act", "dog"]).unwrap();
//! let table = PowerTable::STANDARD;
//! let engine = WordEngine::new(&dictionary, &table);
//!
//! assert!(engine.is_valid_word("CAT"));
//! assert_eq!(engine.calculate_power("cat"), 5);
//! assert_eq!(engine.enumerate_valid_words(&['t', 'a', 'c']).len(), 2);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Validation, scoring and round resolution
pub mod engine;

// Running battles
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging setup
pub mod logging;
