//! # pdf-quiz
//!
//! Turns multiple-choice questions found in PDF or plain text documents into
//! an interactive terminal quiz.
//!
//! Questions are recognised line by line: `1. ...` starts a question,
//! `A. ...` to `D. ...` are options, and `Answer:` / `Explanation:` lines
//! (any case) attach to the question above them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pdf_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Extract and parse questions from a PDF
//!     let quiz = Quiz::from_path("questions.pdf")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
pub mod logger;
mod models;
pub mod parser;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::{debug, info};

pub use app::App;
pub use data::{
    export_questions_to_json, extract_pdf_text, join_pages, load_questions, LoadError, SourceKind,
};
pub use models::{AppState, Question};
pub use parser::parse_mcqs;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading or saving questions.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// Parse a quiz out of document text.
    pub fn from_text(text: &str) -> Self {
        Self::new(parse_mcqs(text))
    }

    /// Load a quiz from a PDF, JSON or plain text file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pdf_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_path("chapter-3.pdf").expect("Failed to load quiz");
    /// println!("{} questions", quiz.questions().len());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions(path)?;
        Ok(Self::new(questions))
    }

    pub fn questions(&self) -> &[Question] {
        self.app.questions()
    }

    /// True when the source held nothing to quiz on.
    pub fn is_empty(&self) -> bool {
        self.app.questions().is_empty()
    }

    /// Save the parsed questions as JSON so they can be reloaded later.
    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), QuizError> {
        export_questions_to_json(self.app.questions(), path)?;
        Ok(())
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        info!(questions = self.app.total_questions(), "starting quiz");
        let mut session = terminal::TerminalSession::enter()?;
        let result = run_event_loop(session.terminal_mut(), &mut self.app);
        session.leave()?;
        info!(score = self.app.score(), "quiz finished");
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    debug!(?key, state = ?app.state, "key pressed");
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.is_revealed() {
                app.next_question();
            } else {
                app.submit_selected();
            }
            false
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.next_question();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.skip_question();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "\
1. What is the capital of France?
A. Berlin
B. Paris
Answer: B
2. What is 2+2?
A. 3
B. 4
Answer: B
";

    fn press(app: &mut App, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| handle_input(app, *key))
    }

    #[test]
    fn test_full_run_through_keys() {
        let mut quiz = Quiz::from_text(TEXT);
        let app = quiz.app_mut();

        assert!(!press(app, &[KeyCode::Enter]));
        assert_eq!(app.state, AppState::Quiz);

        // Second option, correct.
        press(app, &[KeyCode::Char('j'), KeyCode::Enter]);
        assert_eq!(app.selected_option(), Some("B. Paris"));
        assert_eq!(app.score(), 1);

        // Enter after reveal advances.
        press(app, &[KeyCode::Enter]);
        assert_eq!(app.current_index(), 1);

        // First option, wrong.
        press(app, &[KeyCode::Enter, KeyCode::Char('n')]);
        assert_eq!(app.score(), 1);
        assert_eq!(app.state, AppState::Result);

        press(app, &[KeyCode::Char('r')]);
        assert_eq!(app.state, AppState::Welcome);
        assert_eq!(app.score(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::with_questions(parse_mcqs(TEXT));
        assert!(handle_input(&mut app, KeyCode::Char('q')));

        app.start_quiz();
        assert!(handle_input(&mut app, KeyCode::Char('Q')));
        assert!(!handle_input(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_cursor_frozen_after_reveal() {
        let mut app = App::with_questions(parse_mcqs(TEXT));
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.selected_option(), Some("A. Berlin"));

        press(&mut app, &[KeyCode::Down]);
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_empty_quiz() {
        let quiz = Quiz::from_text("nothing here");
        assert!(quiz.is_empty());

        let mut app = App::with_questions(Vec::new());
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.state, AppState::Welcome);
    }

    #[test]
    fn test_quiz_error_display() {
        let err = QuizError::from(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(err.to_string(), "IO error: boom");
    }
}
