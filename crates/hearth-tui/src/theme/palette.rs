//! Color palette for the glass-panel theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Primary text
pub const TEXT_SECONDARY: Color = Color::Gray; // Secondary text
pub const TEXT_MUTED: Color = Color::DarkGray; // Muted text
pub const TEXT_BRIGHT: Color = Color::White; // Bright/emphasis text
pub const CONTRAST_FG: Color = Color::Black; // Foreground on accent backgrounds

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Unlocked/success
pub const STATUS_RED: Color = Color::Red; // Invalid entry
pub const STATUS_YELLOW: Color = Color::Yellow; // Keybinding hints

// --- Weather ---
pub const WEATHER_SUN: Color = Color::Yellow;
pub const WEATHER_CLOUD: Color = Color::Gray;
pub const WEATHER_RAIN: Color = Color::Blue;
pub const WEATHER_STORM: Color = Color::Magenta;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_constants_are_valid() {
        let _: Color = ACCENT;
        let _: Color = DEEPEST_BG;
        let _: Color = STATUS_GREEN;
    }

    #[test]
    fn test_weather_colors_defined() {
        let _: Color = WEATHER_SUN;
        let _: Color = WEATHER_CLOUD;
        let _: Color = WEATHER_RAIN;
        let _: Color = WEATHER_STORM;
    }
}
