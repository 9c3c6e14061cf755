//! Application error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // ─────────────────────────────────────────────────────────────
    // Credential Verification Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid PIN: {pin}")]
    InvalidPin { pin: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn invalid_pin(pin: impl Into<String>) -> Self {
        Self::InvalidPin { pin: pin.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// The rejected PIN, if this is a verification failure.
    pub fn rejected_pin(&self) -> Option<&str> {
        match self {
            Error::InvalidPin { pin } => Some(pin),
            _ => None,
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::InvalidPin { .. } | Error::ChannelSend { .. } | Error::Config { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::invalid_pin("9999");
        assert_eq!(err.to_string(), "Invalid PIN: 9999");

        let err = Error::terminal("raw mode unavailable");
        assert_eq!(err.to_string(), "Terminal error: raw mode unavailable");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_rejected_pin_carried() {
        let err = Error::invalid_pin("0000");
        assert_eq!(err.rejected_pin(), Some("0000"));
        assert_eq!(Error::ChannelClosed.rejected_pin(), None);
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".to_string()).is_fatal());
        assert!(Error::ChannelClosed.is_fatal());
        assert!(!Error::invalid_pin("1111").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::invalid_pin("1111").is_recoverable());
        assert!(Error::config("bad toml").is_recoverable());
        assert!(!Error::TerminalInit("no tty".to_string()).is_recoverable());
    }
}
