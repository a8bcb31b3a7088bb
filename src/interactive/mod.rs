//! Interactive TUI interface
//!
//! Full-screen battle built on ratatui and crossterm.

pub mod app;
pub mod rendering;

pub use app::{App, InputMode, run_tui};
