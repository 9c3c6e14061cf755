//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` — single-width glyphs that work in most terminals
//! - `IconMode::Ascii` — plain ASCII fallback for minimal terminals

use hearth_app::config::IconMode;
use hearth_core::content::{ToolKind, WeatherKind};

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Weather condition glyph for forecast cards and the snapshot.
    pub fn weather(&self, kind: WeatherKind) -> &'static str {
        match self.mode {
            IconMode::Unicode => match kind {
                WeatherKind::Sunny => "\u{2600}",  // ☀
                WeatherKind::Cloudy => "\u{2601}", // ☁
                WeatherKind::Rainy => "\u{2602}",  // ☂
                WeatherKind::Stormy => "\u{21af}", // ↯
            },
            IconMode::Ascii => match kind {
                WeatherKind::Sunny => "*",
                WeatherKind::Cloudy => "~",
                WeatherKind::Rainy => "/",
                WeatherKind::Stormy => "!",
            },
        }
    }

    /// Tool-card glyph by category.
    pub fn tool(&self, kind: ToolKind) -> &'static str {
        match self.mode {
            IconMode::Unicode => match kind {
                ToolKind::Weather => "\u{2600}",    // ☀
                ToolKind::Calculator => "\u{2211}", // ∑
                ToolKind::Bank => "$",
                ToolKind::Travel => "\u{2708}",    // ✈
                ToolKind::Games => "\u{265e}",     // ♞
                ToolKind::VideoChat => "\u{260e}", // ☎
            },
            IconMode::Ascii => match kind {
                ToolKind::Weather => "*",
                ToolKind::Calculator => "=",
                ToolKind::Bank => "$",
                ToolKind::Travel => "^",
                ToolKind::Games => "#",
                ToolKind::VideoChat => "@",
            },
        }
    }

    pub fn bell(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2726}", // ✦
            IconMode::Ascii => "[!]",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{276f}", // ❯
            IconMode::Ascii => ">",
        }
    }

    pub fn masked_digit(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{25cf}", // ●
            IconMode::Ascii => "*",
        }
    }

    pub fn movie(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{25b6}", // ▶
            IconMode::Ascii => ">",
        }
    }

    pub fn food(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2668}", // ♨
            IconMode::Ascii => "%",
        }
    }

    pub fn toolbox(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2692}", // ⚒
            IconMode::Ascii => "+",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_icons_are_ascii() {
        let icons = IconSet::new(IconMode::Ascii);
        for kind in [
            WeatherKind::Sunny,
            WeatherKind::Cloudy,
            WeatherKind::Rainy,
            WeatherKind::Stormy,
        ] {
            assert!(icons.weather(kind).is_ascii());
        }
        assert!(icons.bell().is_ascii());
        assert!(icons.prompt().is_ascii());
        assert!(icons.masked_digit().is_ascii());
    }

    #[test]
    fn test_unicode_weather_icons_distinct() {
        let icons = IconSet::new(IconMode::Unicode);
        let glyphs = [
            icons.weather(WeatherKind::Sunny),
            icons.weather(WeatherKind::Cloudy),
            icons.weather(WeatherKind::Rainy),
            icons.weather(WeatherKind::Stormy),
        ];
        for (i, a) in glyphs.iter().enumerate() {
            for b in glyphs.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
