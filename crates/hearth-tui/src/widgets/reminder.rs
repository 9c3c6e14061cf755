//! Header reminder line

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use hearth_core::content::Reminder;

use crate::theme::{icons::IconSet, styles};

/// Bell icon, reminder text, and its time.
pub struct ReminderLine<'a> {
    reminder: &'a Reminder,
    icons: IconSet,
}

impl<'a> ReminderLine<'a> {
    pub fn new(reminder: &'a Reminder, icons: IconSet) -> Self {
        Self { reminder, icons }
    }

    pub fn to_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(self.icons.bell().to_string(), styles::accent()),
            Span::raw(" "),
            Span::styled(self.reminder.text.to_string(), styles::text_secondary()),
            Span::raw(" "),
            Span::styled(self.reminder.time.to_string(), styles::accent_bold()),
        ])
    }
}

impl Widget for ReminderLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_line(area.x, area.y, &self.to_line(), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use hearth_app::config::IconMode;
    use hearth_core::Catalog;

    #[test]
    fn test_reminder_shows_text_and_time() {
        let mut term = TestTerminal::new();
        let catalog = Catalog::generate();
        let widget = ReminderLine::new(&catalog.reminder, IconSet::new(IconMode::Ascii));
        term.render_widget(widget, term.area());
        assert!(term.buffer_contains("Extra cool people meeting"));
        assert!(term.buffer_contains("10AM"));
    }
}
