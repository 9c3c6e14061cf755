//! hearth-tui - Terminal UI for hearth
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! layout, the theme system, widget rendering, and the main event loop.

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
