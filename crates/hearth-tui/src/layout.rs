//! Screen layout calculation

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use hearth_app::MenuSection;

/// Areas of the lock screen
#[derive(Debug, Clone, Copy)]
pub struct LockAreas {
    pub clock: Rect,
    pub date: Rect,
    pub weather: Rect,
    pub hint: Rect,
}

/// Split the screen for the lock view: a vertically centered stack of
/// clock, date, weather snapshot, and the sign-in hint.
pub fn lock_screen(area: Rect) -> LockAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(2),
            Constraint::Length(1), // clock
            Constraint::Length(1), // date
            Constraint::Length(1), // weather
            Constraint::Length(1), // spacer
            Constraint::Length(1), // hint
            Constraint::Fill(3),
        ])
        .split(area);

    LockAreas {
        clock: chunks[1],
        date: chunks[2],
        weather: chunks[3],
        hint: chunks[5],
    }
}

/// Areas of the PIN entry screen
#[derive(Debug, Clone, Copy)]
pub struct PinAreas {
    pub info: Rect,
    pub pad: Rect,
    pub label: Rect,
    pub status: Rect,
}

/// Split the screen for PIN entry: info row on top, centered pad, the
/// entry label, and a status line (spinner or invalid indicator).
pub fn pin_screen(area: Rect) -> PinAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // info
            Constraint::Fill(1),
            Constraint::Length(3), // pad
            Constraint::Length(1), // label
            Constraint::Length(1), // status
            Constraint::Fill(2),
        ])
        .split(area);

    PinAreas {
        info: chunks[0],
        pad: chunks[2],
        label: chunks[3],
        status: chunks[4],
    }
}

/// Areas of the unlocked menu screen
#[derive(Debug, Clone)]
pub struct MenuAreas {
    pub header: Rect,
    pub quick_nav: Rect,
    pub sections: [Rect; MenuSection::ALL.len()],
}

/// Height of one menu section panel, borders included.
const SECTION_HEIGHT: u16 = 5;

/// Split the screen for the menu: header panel, quick-nav row, and one
/// fixed-height panel per section. On short terminals trailing sections
/// collapse to zero height and are skipped by the renderer.
pub fn menu(area: Rect) -> MenuAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(1), // quick nav
            Constraint::Min(0),    // sections
        ])
        .split(area);
    let body = chunks[2];

    // Hand the body out top-down so earlier sections keep their full height
    // and trailing ones collapse first.
    let mut sections = [Rect::default(); MenuSection::ALL.len()];
    let mut y = body.y;
    for slot in sections.iter_mut() {
        let height = SECTION_HEIGHT.min(body.bottom().saturating_sub(y));
        *slot = Rect::new(body.x, y, body.width, height);
        y += height;
    }

    MenuAreas {
        header: chunks[0],
        quick_nav: chunks[1],
        sections,
    }
}

/// A rect of `width` x `height` centered horizontally in `area`, anchored to
/// the area's own vertical position.
pub fn centered_horizontal(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    Rect::new(x, area.y, width, area.height)
}
