use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::Span,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, START_TRAINING};

use super::{circle::BreathCircle, header_style, inner, legend_style, ACCENT, PHASE_COLOR};

pub fn render(app: &App, f: &mut Frame) {
    let area = inner(f.area());
    let Some(view) = app.breathing() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // affirmation
            Constraint::Min(3),    // circle
            Constraint::Length(2), // phase or start prompt
            Constraint::Length(1), // legend
        ])
        .split(area);

    if view.finished {
        f.render_widget(
            Paragraph::new(Span::styled(START_TRAINING, header_style()))
                .alignment(Alignment::Center),
            chunks[2],
        );
        f.render_widget(
            Paragraph::new(Span::styled("(enter) start  (esc)ape", legend_style()))
                .alignment(Alignment::Center),
            chunks[3],
        );
        return;
    }

    f.render_widget(
        Paragraph::new(view.affirmation)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    if let Some(frame) = view.frame {
        f.render_widget(BreathCircle::new(frame.radius, ACCENT), chunks[1]);
        f.render_widget(
            Paragraph::new(Span::styled(
                frame.phase.label(),
                header_style().fg(PHASE_COLOR),
            ))
            .alignment(Alignment::Center),
            chunks[2],
        );
    }
}
