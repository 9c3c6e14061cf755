//! # hearth-core - Core Domain Types
//!
//! Foundation crate for hearth. Provides domain types, error handling,
//! numeric/time helpers, the static content catalog, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (chrono, rand, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Numeric helpers (`num`)
//! - [`clamp()`] - Bound a value to an inclusive range
//! - [`rand_range()`] - Uniform random value in an inclusive range
//!
//! ### Clock formatting (`clock`)
//! - [`format_hours()`] - 24-hour value to 12-hour display (0 -> 12)
//! - [`format_segment()`] - Two-digit zero-padded minute/second segment
//! - [`format_clock()`] / [`format_clock_seconds()`] - `H:MM` / `H:MM:SS`
//!
//! ### Content catalog (`content`)
//! - [`Catalog`] - The full hard-coded widget content set
//! - [`ForecastDay`], [`Tool`], [`Restaurant`], [`Movie`], [`Reminder`]
//! - [`WeatherKind`] - Weather condition for forecast days
//!
//! ### Error handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use hearth_core::prelude::*;
//! ```

pub mod clock;
pub mod content;
pub mod error;
pub mod logging;
pub mod num;

/// Prelude for common imports used throughout all hearth crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use clock::{format_clock, format_clock_seconds, format_hours, format_segment};
pub use content::{
    Catalog, ForecastDay, Movie, QuickNavItem, Reminder, Restaurant, Tool, ToolKind, WeatherKind,
};
pub use error::{Error, Result};
pub use num::{clamp, rand_range};
