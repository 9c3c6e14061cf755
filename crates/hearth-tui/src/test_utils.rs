//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering using
//! ratatui's TestBackend. These tests are fast and deterministic, unlike
//! PTY-based tests.

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with custom dimensions
    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Run a full-frame draw closure (like `render::view`)
    pub fn draw_with(&mut self, f: impl FnOnce(&mut Frame)) {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// The rendered buffer flattened to a single string, rows joined by
    /// newlines.
    pub fn content(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = *buffer.area();
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buffer.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    /// Whether the rendered buffer contains `needle` on any single row.
    pub fn buffer_contains(&self, needle: &str) -> bool {
        self.content().lines().any(|line| line.contains(needle))
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
