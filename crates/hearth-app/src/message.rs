//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// Verdict delivered by a finished verification task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// PIN matched the configured secret
    Granted,
    /// PIN was rejected; carries the offending entry
    Denied { pin: String },
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (clock, spinner, digit masking)
    Tick,

    /// Quit the application (signal handler, Ctrl+C, quit key)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Session Messages
    // ─────────────────────────────────────────────────────────
    /// Start PIN entry from the lock screen
    BeginLogin,

    /// Abandon PIN entry or an in-flight verification
    CancelLogin,

    /// Leave the unlocked menu and return to the lock screen
    SignOut,

    /// A digit was typed into the PIN pad
    PinDigit(char),

    /// Remove the most recent PIN digit
    PinBackspace,

    /// A verification task finished
    VerifyFinished { outcome: VerifyOutcome },

    /// Automatic `LogInError -> LoggingIn` re-arm after a rejection
    RearmPinEntry,

    // ─────────────────────────────────────────────────────────
    // Menu Navigation
    // ─────────────────────────────────────────────────────────
    /// Focus the next menu section
    MenuNextSection,

    /// Focus the previous menu section
    MenuPrevSection,

    /// Jump to a section by index (keys 1-4)
    MenuSelectSection(usize),

    /// Scroll the focused card row one card left
    MenuScrollLeft,

    /// Scroll the focused card row one card right
    MenuScrollRight,
}
