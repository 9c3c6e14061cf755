//! Card rows for the restaurants, tools, and movies sections

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use hearth_core::content::{Movie, Restaurant, Tool};

use crate::theme::{icons::IconSet, styles};

const RESTAURANT_CARD_WIDTH: u16 = 26;
const TOOL_CARD_WIDTH: u16 = 15;
const MOVIE_CARD_WIDTH: u16 = 34;

/// Truncate to a display width, appending an ellipsis when cut.
fn truncate_to_width(text: &str, max_width: u16) -> String {
    let max_width = max_width as usize;
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.to_string().width();
        if used + w >= max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('\u{2026}');
    out
}

/// Render up to three lines into a card rect.
fn render_card_lines(lines: &[Line], area: Rect, buf: &mut Buffer) {
    for (row, line) in lines.iter().enumerate() {
        if row as u16 >= area.height {
            break;
        }
        buf.set_line(area.x, area.y + row as u16, line, area.width);
    }
}

/// Lay the cards of a row out left to right from `offset`, clipping at the
/// right edge. `render_one` draws a single card into its rect.
fn render_row<T>(
    items: &[T],
    offset: usize,
    card_width: u16,
    area: Rect,
    buf: &mut Buffer,
    mut render_one: impl FnMut(&T, Rect, &mut Buffer),
) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    for (slot, item) in items.iter().skip(offset).enumerate() {
        let x = area.x + slot as u16 * card_width;
        if x + card_width > area.right() {
            break;
        }
        let card = Rect::new(x, area.y, card_width - 2, area.height);
        render_one(item, card, buf);
    }
}

/// Horizontal row of restaurant cards.
pub struct RestaurantRow<'a> {
    restaurants: &'a [Restaurant],
    offset: usize,
}

impl<'a> RestaurantRow<'a> {
    pub fn new(restaurants: &'a [Restaurant], offset: usize) -> Self {
        Self {
            restaurants,
            offset,
        }
    }
}

impl Widget for RestaurantRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_row(
            self.restaurants,
            self.offset,
            RESTAURANT_CARD_WIDTH,
            area,
            buf,
            |restaurant, card, buf| {
                let lines = [
                    Line::from(Span::styled(restaurant.title, styles::text_bright())),
                    Line::from(Span::styled(
                        truncate_to_width(restaurant.desc, card.width),
                        styles::text_secondary(),
                    )),
                ];
                render_card_lines(&lines, card, buf);
            },
        );
    }
}

/// Horizontal row of tool cards.
pub struct ToolRow<'a> {
    tools: &'a [Tool],
    offset: usize,
    icons: IconSet,
}

impl<'a> ToolRow<'a> {
    pub fn new(tools: &'a [Tool], offset: usize, icons: IconSet) -> Self {
        Self {
            tools,
            offset,
            icons,
        }
    }
}

impl Widget for ToolRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let icons = self.icons;
        render_row(
            self.tools,
            self.offset,
            TOOL_CARD_WIDTH,
            area,
            buf,
            |tool, card, buf| {
                let lines = [
                    Line::from(Span::styled(tool.label, styles::text_muted())),
                    Line::from(Span::styled(tool.name, styles::text_bright())),
                    Line::from(Span::styled(icons.tool(tool.kind).to_string(), styles::accent())),
                ];
                render_card_lines(&lines, card, buf);
            },
        );
    }
}

/// Horizontal row of movie cards.
pub struct MovieRow<'a> {
    movies: &'a [Movie],
    offset: usize,
    icons: IconSet,
}

impl<'a> MovieRow<'a> {
    pub fn new(movies: &'a [Movie], offset: usize, icons: IconSet) -> Self {
        Self {
            movies,
            offset,
            icons,
        }
    }
}

impl Widget for MovieRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let icons = self.icons;
        render_row(
            self.movies,
            self.offset,
            MOVIE_CARD_WIDTH,
            area,
            buf,
            |movie, card, buf| {
                let lines = [
                    Line::from(vec![
                        Span::styled(icons.movie().to_string(), styles::accent()),
                        Span::raw(" "),
                        Span::styled(
                            truncate_to_width(movie.title, card.width.saturating_sub(2)),
                            styles::text_bright(),
                        ),
                    ]),
                    Line::from(Span::styled(
                        truncate_to_width(movie.desc, card.width),
                        styles::text_secondary(),
                    )),
                ];
                render_card_lines(&lines, card, buf);
            },
        );
    }
}
