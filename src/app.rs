use crate::models::{AppState, Question};

/// Quiz session over one loaded set of questions.
///
/// `load`, `select_option` and `advance` carry the scoring rules. The rest is
/// front-end state: which screen is shown, the highlighted option and the
/// result list scroll offset.
pub struct App {
    pub state: AppState,
    questions: Vec<Question>,
    current_index: usize,
    selected_option: Option<String>,
    revealed: bool,
    score: usize,
    cursor: usize,
    responses: Vec<Option<String>>,
    result_scroll: usize,
}

impl App {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let mut app = Self {
            state: AppState::Welcome,
            questions: Vec::new(),
            current_index: 0,
            selected_option: None,
            revealed: false,
            score: 0,
            cursor: 0,
            responses: Vec::new(),
            result_scroll: 0,
        };
        app.load(questions);
        app
    }

    /// Replace the question set and reset all progress.
    pub fn load(&mut self, questions: Vec<Question>) {
        self.responses = vec![None; questions.len()];
        self.questions = questions;
        self.current_index = 0;
        self.selected_option = None;
        self.revealed = false;
        self.score = 0;
        self.cursor = 0;
        self.result_scroll = 0;
    }

    /// Choose `option` for the current question and reveal the answer.
    ///
    /// Ignored once the answer is revealed or when past the last question.
    pub fn select_option(&mut self, option: &str) {
        if self.revealed {
            return;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return;
        };

        if question.is_correct(option) {
            self.score += 1;
        }
        self.selected_option = Some(option.to_string());
        self.revealed = true;
        self.responses[self.current_index] = Some(option.to_string());
    }

    /// Move to the next question. Does not stop at the end of the list.
    pub fn advance(&mut self) {
        self.current_index += 1;
        self.selected_option = None;
        self.revealed = false;
        self.cursor = 0;
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The option chosen for each question, `None` where none was chosen.
    pub fn responses(&self) -> &[Option<String>] {
        &self.responses
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn percentage(&self) -> f64 {
        if self.questions.is_empty() {
            0.0
        } else {
            (self.score as f64 / self.questions.len() as f64) * 100.0
        }
    }

    pub fn start_quiz(&mut self) {
        if !self.questions.is_empty() {
            self.state = AppState::Quiz;
        }
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 && !self.revealed {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 && !self.revealed {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Choose the option under the cursor.
    pub fn submit_selected(&mut self) {
        let option = self
            .current_question()
            .and_then(|q| q.options.get(self.cursor))
            .cloned();

        if let Some(option) = option {
            self.select_option(&option);
        }
    }

    /// Skip a question that has no options to choose from.
    pub fn skip_question(&mut self) {
        if !self.revealed && self.option_count() == 0 {
            self.revealed = true;
        }
    }

    /// Go to the next question after the answer is revealed, or to the
    /// results once the last one is done.
    pub fn next_question(&mut self) {
        if !self.revealed {
            return;
        }

        if self.is_last_question() {
            self.state = AppState::Result;
        } else {
            self.advance();
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.questions.len().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        let questions = std::mem::take(&mut self.questions);
        self.load(questions);
        self.state = AppState::Welcome;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_questions(Vec::new())
    }
}
