//! Weather snapshot and forecast row widgets

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use hearth_core::content::{ForecastDay, WeatherKind};

use crate::theme::{icons::IconSet, styles};

/// Compact current-conditions readout: icon, temperature, unit.
///
/// The lock screen's snapshot always reports sun; only the temperature is
/// randomized.
pub struct WeatherSnap {
    temperature: i32,
    icons: IconSet,
}

impl WeatherSnap {
    pub fn new(temperature: i32, icons: IconSet) -> Self {
        Self { temperature, icons }
    }

    /// The snapshot as a line, for embedding into header rows.
    pub fn to_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                self.icons.weather(WeatherKind::Sunny).to_string(),
                styles::weather(WeatherKind::Sunny),
            ),
            Span::raw(" "),
            Span::styled(format!("{}", self.temperature), styles::text_primary()),
            Span::styled("\u{b0}F", styles::text_muted()),
        ])
    }
}

impl Widget for WeatherSnap {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        Paragraph::new(self.to_line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// Width of one forecast day card, including its trailing gap.
const DAY_CARD_WIDTH: u16 = 10;

/// Horizontal row of forecast day cards.
///
/// `offset` is the index of the leftmost visible card; cards that do not
/// fit on the right are clipped.
pub struct ForecastRow<'a> {
    days: &'a [ForecastDay],
    offset: usize,
    icons: IconSet,
}

impl<'a> ForecastRow<'a> {
    pub fn new(days: &'a [ForecastDay], offset: usize, icons: IconSet) -> Self {
        Self {
            days,
            offset,
            icons,
        }
    }
}

impl Widget for ForecastRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for (slot, day) in self.days.iter().skip(self.offset).enumerate() {
            let x = area.x + slot as u16 * DAY_CARD_WIDTH;
            if x + DAY_CARD_WIDTH > area.right() {
                break;
            }
            let card = Rect::new(x, area.y, DAY_CARD_WIDTH - 1, area.height);
            render_day_card(day, self.icons, card, buf);
        }
    }
}

fn render_day_card(day: &ForecastDay, icons: IconSet, area: Rect, buf: &mut Buffer) {
    let lines = [
        Line::from(vec![
            Span::styled(format!("{}", day.temperature), styles::text_bright()),
            Span::styled("\u{b0}F", styles::text_muted()),
        ]),
        Line::from(vec![
            Span::styled(
                icons.weather(day.weather).to_string(),
                styles::weather(day.weather),
            ),
            Span::raw(" "),
            Span::styled(day.weather.label(), styles::text_secondary()),
        ]),
        Line::from(Span::styled(day.name, styles::text_muted())),
    ];

    for (row, line) in lines.iter().enumerate() {
        if row as u16 >= area.height {
            break;
        }
        buf.set_line(area.x, area.y + row as u16, line, area.width);
    }
}
