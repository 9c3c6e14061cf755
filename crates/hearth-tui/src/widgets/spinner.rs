//! Verification-in-progress spinner

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Centered spinner with a label, advanced by the tick counter.
pub struct Spinner<'a> {
    frame: u64,
    label: &'a str,
}

impl<'a> Spinner<'a> {
    pub fn new(frame: u64, label: &'a str) -> Self {
        Self { frame, label }
    }

    fn glyph(&self) -> &'static str {
        FRAMES[(self.frame % FRAMES.len() as u64) as usize]
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let line = Line::from(vec![
            Span::styled(self.glyph(), styles::accent()),
            Span::raw(" "),
            Span::styled(self.label.to_string(), styles::text_secondary()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_spinner_shows_label() {
        let mut term = TestTerminal::new();
        term.render_widget(Spinner::new(0, "Verifying"), term.area());
        assert!(term.buffer_contains("Verifying"));
    }

    #[test]
    fn test_spinner_frame_cycles() {
        let first = Spinner::new(0, "x").glyph();
        let second = Spinner::new(1, "x").glyph();
        let wrapped = Spinner::new(FRAMES.len() as u64, "x").glyph();
        assert_ne!(first, second);
        assert_eq!(first, wrapped);
    }
}
