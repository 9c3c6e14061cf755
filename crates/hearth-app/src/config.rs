//! Settings parser for hearth.toml

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::state::PIN_LENGTH;
use crate::verify::DEFAULT_PIN;
use hearth_core::prelude::*;

const CONFIG_FILENAME: &str = "hearth.toml";

/// Application settings (hearth.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub verifier: VerifierSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Session/unlock settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionSettings {
    /// The secret a PIN entry is checked against
    #[serde(default = "default_pin")]
    pub pin: String,

    /// Show the secret in the PIN pad label (this is a display mockup)
    #[serde(default = "default_true")]
    pub show_pin_hint: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            pin: default_pin(),
            show_pin_hint: true,
        }
    }
}

/// Simulated verifier latency window
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerifierSettings {
    #[serde(default = "default_min_latency")]
    pub min_latency_ms: u64,

    #[serde(default = "default_max_latency")]
    pub max_latency_ms: u64,
}

impl Default for VerifierSettings {
    fn default() -> Self {
        Self {
            min_latency_ms: default_min_latency(),
            max_latency_ms: default_max_latency(),
        }
    }
}

/// Display settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Tick interval driving clock refresh and animations
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Icon rendering mode
    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            icons: IconMode::default(),
        }
    }
}

/// Icon rendering mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// Single-width Unicode glyphs (work in most terminals)
    #[default]
    Unicode,
    /// Plain ASCII fallback
    Ascii,
}

fn default_pin() -> String {
    DEFAULT_PIN.to_string()
}

fn default_true() -> bool {
    true
}

fn default_min_latency() -> u64 {
    300
}

fn default_max_latency() -> u64 {
    700
}

fn default_tick_ms() -> u64 {
    100
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `<dir>/hearth.toml`.
///
/// Returns default settings if the file doesn't exist or can't be parsed;
/// fields that fail validation are individually reset to their defaults.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let settings = match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    };

    validate(settings)
}

/// Reset out-of-contract fields to their defaults.
fn validate(mut settings: Settings) -> Settings {
    let pin_ok = settings.session.pin.len() == PIN_LENGTH
        && settings.session.pin.chars().all(|c| c.is_ascii_digit());
    if !pin_ok {
        warn!(
            "Configured pin is not {} digits; using default",
            PIN_LENGTH
        );
        settings.session.pin = default_pin();
    }

    if settings.verifier.min_latency_ms > settings.verifier.max_latency_ms {
        warn!("Verifier latency window is inverted; using defaults");
        settings.verifier = VerifierSettings::default();
    }

    if settings.ui.tick_ms == 0 {
        warn!("tick_ms must be non-zero; using default");
        settings.ui.tick_ms = default_tick_ms();
    }

    settings
}
