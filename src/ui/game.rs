use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

use super::{circle::BreathCircle, dim_style, inner, legend_style};

const PLACEHOLDER: &str = "Enter your number";

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

pub fn render(app: &App, f: &mut Frame) {
    let area = inner(f.area());
    let view = &app.game;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // circle
            Constraint::Length(2), // message
            Constraint::Length(3), // guess field
            Constraint::Length(1), // streak
            Constraint::Length(1), // legend
        ])
        .split(area);

    f.render_widget(BreathCircle::new(view.radius, view.color), chunks[0]);

    f.render_widget(
        Paragraph::new(view.message.as_str()).alignment(Alignment::Center),
        chunks[1],
    );

    if view.input_visible {
        let (text, style) = if view.input.is_empty() {
            (PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            (view.input.as_str(), Style::default())
        };
        let width = text.width().max(PLACEHOLDER.width()) as u16 + 4;
        let field = centered(chunks[2], width);
        f.render_widget(
            Paragraph::new(Span::styled(text, style))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            field,
        );
        if field.height > 2 {
            let typed = view.input.width() as u16;
            let x = field.x + (field.width.saturating_sub(typed)) / 2 + typed;
            f.set_cursor_position((x.min(field.right().saturating_sub(2)), field.y + 1));
        }
    }

    f.render_widget(
        Paragraph::new(Span::styled(format!("Streak: {}", app.streak()), dim_style()))
            .alignment(Alignment::Center),
        chunks[3],
    );

    let legend = if view.input_visible {
        "(enter) submit  (ctrl+e) end session  (esc)ape"
    } else {
        "(e)nd session  (esc)ape"
    };
    f.render_widget(
        Paragraph::new(Span::styled(legend, legend_style())).alignment(Alignment::Center),
        chunks[4],
    );
}
