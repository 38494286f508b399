//! finsecure-tui - Terminal UI for the FinSecure console
//!
//! Renders `AppState` with ratatui and feeds crossterm key events and
//! background completions through the TEA loop in finsecure-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
