use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Question;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(if app.is_revealed() { 7 } else { 0 }),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_prompt(frame, chunks[1], &question.prompt);
    render_options(frame, chunks[2], question, app);

    if app.is_revealed() {
        render_reveal(frame, chunks[3], question, app);
    }

    render_controls(frame, chunks[4], app);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "Question {} / {}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_style(question: &Question, option: &str, app: &App, under_cursor: bool) -> Style {
    if app.selected_option() == Some(option) {
        let color = if question.is_correct(option) {
            Color::Green
        } else {
            Color::Red
        };
        return Style::default().fg(color).bold();
    }

    if under_cursor && !app.is_revealed() {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question, app: &App) {
    if question.options.is_empty() {
        let widget = Paragraph::new("This question has no options.").fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let under_cursor = index == app.cursor();
        let style = option_style(question, option, app, under_cursor);
        let marker = if under_cursor && !app.is_revealed() {
            ">"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_reveal(frame: &mut Frame, area: Rect, question: &Question, app: &App) {
    let answer = question.answer.as_deref().unwrap_or("(not given)");
    let mut lines = vec![Line::from(vec![
        Span::styled("Correct answer: ", Style::default().bold()),
        Span::raw(answer),
    ])];

    if let Some(explanation) = &question.explanation {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Explanation: ", Style::default().bold()),
            Span::raw(explanation.as_str()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Score: {} / {}", app.score(), app.total_questions()),
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Color::Blue)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let hint = match (app.is_revealed(), app.is_last_question()) {
        (false, _) => "j/k navigate  ·  enter select  ·  s skip  ·  q quit",
        (true, false) => "n next question  ·  q quit",
        (true, true) => "n see results  ·  q quit",
    };
    super::render_hint(frame, area, hint);
}
