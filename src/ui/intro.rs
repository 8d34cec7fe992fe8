use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    app::App,
    difficulty::{Difficulty, Mode},
};

use super::{dim_style, header_style, inner, legend_style, ACCENT};

fn radio(label: &str, selected: bool) -> Line<'static> {
    let (mark, style) = if selected {
        ("(•) ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
    } else {
        ("( ) ", Style::default())
    };
    Line::from(Span::styled(format!("{mark}{label}"), style))
}

pub fn render(app: &App, f: &mut Frame) {
    let form = &app.intro;
    let area = inner(f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(1),
            Constraint::Length(Difficulty::ALL.len() as u16 + 1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(2), // sound
            Constraint::Min(0),
            Constraint::Length(1), // legend
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled("Intuition Trainer", header_style()))
            .alignment(Alignment::Center),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(Span::styled("Choose difficulty:", dim_style())),
        chunks[1],
    );
    let levels: Vec<Line> = Difficulty::ALL
        .iter()
        .map(|d| {
            let (low, high) = d.bounds();
            radio(&format!("{d} ({low}-{high})"), *d == form.difficulty)
        })
        .collect();
    f.render_widget(Paragraph::new(levels), chunks[2]);

    f.render_widget(
        Paragraph::new(Span::styled("Choose mode:", dim_style())),
        chunks[3],
    );
    let modes = vec![
        radio(Mode::Think.label(), form.mode == Mode::Think),
        radio(Mode::Input.label(), form.mode == Mode::Input),
    ];
    f.render_widget(Paragraph::new(modes), chunks[4]);

    let sound = if form.sound_enabled { "[x]" } else { "[ ]" };
    f.render_widget(Paragraph::new(format!("{sound} Sound on")), chunks[5]);

    f.render_widget(
        Paragraph::new(Span::styled(
            "(↑/↓) difficulty  (m)ode  (s)ound  (enter) continue  (esc)ape",
            legend_style(),
        ))
        .alignment(Alignment::Center),
        chunks[7],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{session::SessionConfig, ui::buffer_text};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_renders_choices() {
        let mut app = App::new(SessionConfig::default());
        app.intro.difficulty = Difficulty::Hard;
        app.intro.mode = Mode::Input;

        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal.draw(|f| render(&app, f)).unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Intuition Trainer"));
        assert!(text.contains("(•) Hard (1-60)"));
        assert!(text.contains("( ) Easy (1-10)"));
        assert!(text.contains("(•) Input a number"));
        assert!(text.contains("[x] Sound on"));
    }
}
