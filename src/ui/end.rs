use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::{header_style, inner, legend_style};

pub fn render(app: &App, f: &mut Frame) {
    let area = inner(f.area());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled("Session Ended", header_style()))
            .alignment(Alignment::Center),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(format!("Your streak: {}", app.streak())).alignment(Alignment::Center),
        chunks[2],
    );
    f.render_widget(
        Paragraph::new(Span::styled("(enter) close", legend_style()))
            .alignment(Alignment::Center),
        chunks[4],
    );
}
