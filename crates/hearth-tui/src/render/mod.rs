//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use chrono::{DateTime, Local};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use hearth_app::state::{AppState, MenuSection, SessionStatus};
use hearth_core::format_clock;

use crate::layout;
use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets::{
    Clock, ForecastRow, MovieRow, PinPad, QuickNav, ReminderLine, RestaurantRow, Spinner, ToolRow,
    WeatherSnap,
};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: every widget receives the state it displays as explicit
/// arguments, nothing is mutated.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let icons = IconSet::new(state.settings.ui.icons);

    match state.status {
        SessionStatus::LoggedOut => render_lock_screen(frame, area, state, icons),
        SessionStatus::LoggingIn | SessionStatus::VerifyingLogIn | SessionStatus::LogInError => {
            render_pin_screen(frame, area, state, icons)
        }
        SessionStatus::LoggedIn => render_menu(frame, area, state, icons),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lock screen
// ─────────────────────────────────────────────────────────────────────────────

fn render_lock_screen(frame: &mut Frame, area: Rect, state: &AppState, icons: IconSet) {
    let areas = layout::lock_screen(area);

    frame.render_widget(Clock::new(state.clock.now()).with_seconds(), areas.clock);

    let date = Paragraph::new(format_date(state.clock.now()))
        .style(styles::text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(date, areas.date);

    frame.render_widget(
        WeatherSnap::new(state.catalog.snapshot_temperature, icons),
        areas.weather,
    );

    let hint = Line::from(vec![
        Span::styled(icons.prompt(), styles::accent()),
        Span::raw(" "),
        Span::styled("Press ", styles::text_muted()),
        Span::styled("Enter", styles::keybinding()),
        Span::styled(" to sign in", styles::text_muted()),
    ]);
    frame.render_widget(
        Paragraph::new(hint).alignment(Alignment::Center),
        areas.hint,
    );
}

fn format_date(time: &DateTime<Local>) -> String {
    time.format("%A, %B %-d").to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// PIN entry screen
// ─────────────────────────────────────────────────────────────────────────────

fn render_pin_screen(frame: &mut Frame, area: Rect, state: &AppState, icons: IconSet) {
    let areas = layout::pin_screen(area);

    render_info_row(frame, areas.info, state, icons);

    frame.render_widget(PinPad::new(&state.pin, icons), areas.pad);

    let mut label_spans = vec![Span::styled("Enter PIN", styles::text_primary())];
    if state.settings.session.show_pin_hint {
        label_spans.push(Span::styled(
            format!(" ({})", state.settings.session.pin),
            styles::text_muted(),
        ));
    }
    if state.has_login_error() {
        label_spans.push(Span::styled("  Invalid", styles::status_red()));
    }
    label_spans.push(Span::styled("  Esc", styles::keybinding()));
    label_spans.push(Span::styled(" Cancel", styles::text_muted()));

    frame.render_widget(
        Paragraph::new(Line::from(label_spans)).alignment(Alignment::Center),
        areas.label,
    );

    if state.status == SessionStatus::VerifyingLogIn {
        frame.render_widget(Spinner::new(state.spinner_frame, "Verifying..."), areas.status);
    }
}

/// Small time + weather readout for the top of the PIN and menu screens.
fn render_info_row(frame: &mut Frame, area: Rect, state: &AppState, icons: IconSet) {
    if area.height == 0 {
        return;
    }
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(format_clock(state.clock.now()), styles::text_bright()),
        Span::raw("  "),
    ];
    spans.extend(
        WeatherSnap::new(state.catalog.snapshot_temperature, icons)
            .to_line()
            .spans,
    );
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ─────────────────────────────────────────────────────────────────────────────
// Unlocked menu
// ─────────────────────────────────────────────────────────────────────────────

fn render_menu(frame: &mut Frame, area: Rect, state: &AppState, icons: IconSet) {
    let areas = layout::menu(area);

    render_menu_header(frame, areas.header, state, icons);

    frame.render_widget(
        QuickNav::new(&state.catalog.quick_nav, state.menu.section.index()),
        areas.quick_nav,
    );

    for section in MenuSection::ALL {
        let section_area = areas.sections[section.index()];
        if section_area.height == 0 {
            continue;
        }
        render_section(frame, section_area, state, icons, section);
    }
}

fn render_menu_header(frame: &mut Frame, area: Rect, state: &AppState, icons: IconSet) {
    let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    // Left: time + weather. Right: key hints.
    let info = Rect::new(inner.x, inner.y, inner.width, 1);
    render_info_row(frame, info, state, icons);

    let hints = Line::from(vec![
        Span::styled("[", styles::text_muted()),
        Span::styled("s", styles::keybinding()),
        Span::styled("] Sign out  ", styles::text_muted()),
        Span::styled("[", styles::text_muted()),
        Span::styled("q", styles::keybinding()),
        Span::styled("] Quit ", styles::text_muted()),
    ]);
    let hints_width = hints.width() as u16;
    if hints_width < inner.width {
        let hints_area = Rect::new(
            inner.x + inner.width - hints_width,
            inner.y,
            hints_width,
            1,
        );
        frame.render_widget(Paragraph::new(hints), hints_area);
    }

    if inner.height >= 2 {
        let reminder_area = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(1), 1);
        frame.render_widget(
            ReminderLine::new(&state.catalog.reminder, icons),
            reminder_area,
        );
    }
}

fn render_section(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    icons: IconSet,
    section: MenuSection,
) {
    let focused = state.menu.section == section;
    let icon = match section {
        MenuSection::Forecast => icons.weather(hearth_core::WeatherKind::Sunny),
        MenuSection::Restaurants => icons.food(),
        MenuSection::Tools => icons.toolbox(),
        MenuSection::Movies => icons.movie(),
    };
    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(icon, styles::accent()),
        Span::raw(" "),
        Span::styled(
            section.title(),
            if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ),
        Span::raw(" "),
    ]);

    let block = styles::glass_block(focused).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let offset = state.menu.offset(section);
    match section {
        MenuSection::Forecast => {
            frame.render_widget(ForecastRow::new(&state.catalog.forecast, offset, icons), inner)
        }
        MenuSection::Restaurants => {
            frame.render_widget(RestaurantRow::new(&state.catalog.restaurants, offset), inner)
        }
        MenuSection::Tools => {
            frame.render_widget(ToolRow::new(&state.catalog.tools, offset, icons), inner)
        }
        MenuSection::Movies => {
            frame.render_widget(MovieRow::new(&state.catalog.movies, offset, icons), inner)
        }
    }
}
