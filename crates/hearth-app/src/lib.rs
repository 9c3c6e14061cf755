//! hearth-app - Application state and orchestration for hearth
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the session state machine, message types, the update function,
//! the simulated credential verifier, and settings loading.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;
pub mod verify;

// Re-export primary types
pub use config::{load_settings, IconMode, Settings};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, VerifyOutcome};
pub use state::{AppState, MenuSection, PinEntry, SessionStatus, PIN_LENGTH};
