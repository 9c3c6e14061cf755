//! PIN pad widget

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use hearth_app::{PinEntry, PIN_LENGTH};

use crate::layout::centered_horizontal;
use crate::theme::{icons::IconSet, styles};

const CELL_WIDTH: u16 = 5;
const CELL_GAP: u16 = 2;

/// Four bordered digit cells, centered in the given area.
///
/// The cell at the cursor position gets an active border. Entered digits
/// show in clear for a moment after entry, then render masked.
pub struct PinPad<'a> {
    pin: &'a PinEntry,
    icons: IconSet,
    /// Render-time reference point for the reveal-then-mask window.
    now: Instant,
}

impl<'a> PinPad<'a> {
    pub fn new(pin: &'a PinEntry, icons: IconSet) -> Self {
        Self {
            pin,
            icons,
            now: Instant::now(),
        }
    }

    /// Pin the reveal reference time (tests).
    pub fn at(mut self, now: Instant) -> Self {
        self.now = now;
        self
    }

    /// Total width of the pad including gaps.
    pub fn width() -> u16 {
        PIN_LENGTH as u16 * CELL_WIDTH + (PIN_LENGTH as u16 - 1) * CELL_GAP
    }
}

impl Widget for PinPad<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 {
            return;
        }
        let pad = centered_horizontal(area, Self::width());

        for index in 0..PIN_LENGTH {
            let x = pad.x + index as u16 * (CELL_WIDTH + CELL_GAP);
            if x + CELL_WIDTH > area.right() {
                break;
            }
            let cell = Rect::new(x, pad.y, CELL_WIDTH, 3);

            let focused = index == self.pin.len() && !self.pin.is_complete();
            let block = styles::glass_block(focused);
            let inner = block.inner(cell);
            block.render(cell, buf);

            let glyph = match self.pin.digits().get(index) {
                Some(digit) if self.pin.is_revealed(index, self.now) => {
                    Span::styled(digit.value.to_string(), styles::text_bright())
                }
                Some(_) => Span::styled(self.icons.masked_digit().to_string(), styles::accent()),
                None => Span::raw(""),
            };

            Paragraph::new(Line::from(glyph))
                .alignment(Alignment::Center)
                .render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use hearth_app::config::IconMode;
    use hearth_app::state::DIGIT_REVEAL;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Ascii)
    }

    #[test]
    fn test_pad_width_covers_all_cells() {
        assert_eq!(PinPad::width(), 26);
    }

    #[test]
    fn test_fresh_digits_render_in_clear() {
        let mut term = TestTerminal::new();
        let mut pin = PinEntry::new();
        pin.push('4');
        pin.push('2');

        term.render_widget(PinPad::new(&pin, icons()), term.area());
        assert!(term.buffer_contains("4"));
        assert!(term.buffer_contains("2"));
    }

    #[test]
    fn test_aged_digits_render_masked() {
        let mut term = TestTerminal::new();
        let mut pin = PinEntry::new();
        pin.push('4');

        let later = Instant::now() + DIGIT_REVEAL;
        term.render_widget(PinPad::new(&pin, icons()).at(later), term.area());
        assert!(!term.buffer_contains("4"));
        assert!(term.buffer_contains("*"));
    }

    #[test]
    fn test_empty_pad_renders_four_cells() {
        let mut term = TestTerminal::new();
        let pin = PinEntry::new();
        term.render_widget(PinPad::new(&pin, icons()), term.area());
        // Rounded-corner borders from the four cells
        let content = term.content();
        assert_eq!(content.matches('\u{256d}').count(), 4);
    }

    #[test]
    fn test_short_area_renders_nothing() {
        let mut term = TestTerminal::new();
        let pin = PinEntry::new();
        term.render_widget(PinPad::new(&pin, icons()), Rect::new(0, 0, 80, 2));
        assert!(!term.buffer_contains("\u{256d}"));
    }
}
