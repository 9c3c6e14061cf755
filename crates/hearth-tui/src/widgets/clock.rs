//! Clock readout widget

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};

use hearth_core::{format_clock, format_clock_seconds};

use crate::theme::styles;

/// Centered clock readout, `H:MM` or `H:MM:SS`.
pub struct Clock<'a> {
    time: &'a DateTime<Local>,
    show_seconds: bool,
}

impl<'a> Clock<'a> {
    pub fn new(time: &'a DateTime<Local>) -> Self {
        Self {
            time,
            show_seconds: false,
        }
    }

    /// Include the seconds segment (lock screen variant).
    pub fn with_seconds(mut self) -> Self {
        self.show_seconds = true;
        self
    }
}

impl Widget for Clock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let text = if self.show_seconds {
            format_clock_seconds(self.time)
        } else {
            format_clock(self.time)
        };
        Paragraph::new(text)
            .style(styles::text_bright())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
