use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let total = app.total_questions();
    let (summary, action, hint) = if total == 0 {
        (
            "No multiple-choice questions found".to_string(),
            Span::styled("Q", Style::default().fg(Color::Red).bold()),
            "to quit",
        )
    } else {
        (
            format!("{} Questions", total),
            Span::styled("ENTER", Style::default().fg(Color::Green).bold()),
            "to start",
        )
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "MCQ QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(summary, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(""),
        Line::from(action),
        Line::from(hint.fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
