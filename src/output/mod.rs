//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_battle_status, print_game_over, print_simulation_result,
    print_turn_report, print_words_result,
};
