//! Screens for the terminal front end.
//!
//! Every screen is drawn inside a shared frame whose title carries the
//! progress through the question set.

mod quiz;
mod result;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let outer = Block::default()
        .borders(Borders::TOP)
        .border_style(Color::DarkGray)
        .title(Line::from(" MCQ QUIZ ".fg(Color::Cyan).bold()).left_aligned())
        .title(Line::from(Span::styled(status(app), Style::default().fg(Color::DarkGray))).right_aligned());
    let area = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    match app.state {
        AppState::Welcome => welcome::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}

fn status(app: &App) -> String {
    match app.state {
        AppState::Welcome => format!(" {} loaded ", app.total_questions()),
        AppState::Quiz | AppState::Result => {
            format!(" score {} / {} ", app.score(), app.total_questions())
        }
    }
}

/// Key hint line at the bottom of a screen.
fn render_hint(frame: &mut Frame, area: Rect, hint: &str) {
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
