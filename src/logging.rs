//! Diagnostic logging setup
//!
//! Game output goes to stdout (or the alternate screen); diagnostics go to
//! stderr through `tracing`. `RUST_LOG` overrides the level picked here.

use anyhow::{Result, anyhow};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Level for a `-v` count
///
/// The TUI starts one step quieter so log lines do not tear the screen.
#[must_use]
pub const fn level_for(verbosity: u8, tui: bool) -> Level {
    match (verbosity, tui) {
        (0, true) => Level::ERROR,
        (0, false) | (1, true) => Level::WARN,
        (1, false) | (2, true) => Level::INFO,
        (2, false) | (3, true) => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8, tui: bool) -> Result<()> {
    let level = level_for(verbosity, tui);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("word_slayer={level}")));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
