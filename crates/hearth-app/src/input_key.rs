//! Abstract input key event, independent of terminal library.
//!
//! This module defines the `InputKey` enum which abstracts keyboard input
//! from the underlying terminal library (crossterm). This keeps hearth-app
//! free of terminal-specific types; the conversion happens at the TUI
//! boundary.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
    /// Tab key
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
}
