pub mod breathing;
pub mod circle;
pub mod end;
pub mod game;
pub mod intro;
pub mod screen;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    Frame,
};

use crate::app::App;

pub const ACCENT: Color = Color::Rgb(0x5c, 0xd3, 0xff);
pub const PHASE_COLOR: Color = Color::Rgb(0x66, 0xe0, 0xff);

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

pub fn header_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn dim_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn legend_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Area inside the standard screen margins
pub fn inner(area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([Constraint::Min(0)])
        .split(area)[0]
}

/// Render whichever screen is active
pub fn draw(app: &App, f: &mut Frame) {
    screen::current_view(app.screen()).render(app, f);
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
