//! Quick-navigation pill row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use hearth_core::content::QuickNavItem;

use crate::theme::styles;

/// One-line row of section shortcuts: `[1] Weather  [2] Food ...`
///
/// The pill for the focused section is highlighted.
pub struct QuickNav<'a> {
    items: &'a [QuickNavItem],
    selected: usize,
}

impl<'a> QuickNav<'a> {
    pub fn new(items: &'a [QuickNavItem], selected: usize) -> Self {
        Self { items, selected }
    }
}

impl Widget for QuickNav<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, item) in self.items.iter().enumerate() {
            if i == self.selected {
                spans.push(Span::styled(
                    format!(" {} {} ", item.id, item.label),
                    styles::focused_selected(),
                ));
            } else {
                spans.push(Span::styled(format!("[{}]", item.id), styles::keybinding()));
                spans.push(Span::styled(format!(" {}", item.label), styles::text_muted()));
            }
            spans.push(Span::raw("  "));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use hearth_core::Catalog;

    #[test]
    fn test_quick_nav_renders_all_labels() {
        let mut term = TestTerminal::new();
        let catalog = Catalog::generate();
        term.render_widget(QuickNav::new(&catalog.quick_nav, 0), term.area());
        for label in ["Weather", "Food", "Apps", "Movies"] {
            assert!(term.buffer_contains(label), "missing label {label}");
        }
    }

    #[test]
    fn test_quick_nav_selected_pill_loses_brackets() {
        let mut term = TestTerminal::new();
        let catalog = Catalog::generate();
        term.render_widget(QuickNav::new(&catalog.quick_nav, 1), term.area());
        assert!(term.buffer_contains("[1]"));
        assert!(!term.buffer_contains("[2]"));
        assert!(term.buffer_contains(" 2 Food "));
    }
}
