//! Command implementations

pub mod analyze;
pub mod simple;
pub mod simulate;
pub mod words;

pub use analyze::{AnalysisResult, analyze_word};
pub use simple::run_simple;
pub use simulate::{GameSummary, SimulationConfig, SimulationResult, run_simulation, simulate_game};
pub use words::{WordsResult, list_words};
