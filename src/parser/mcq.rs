//! Folding classified lines into questions.

use tracing::debug;

use crate::models::Question;

use super::line::{classify, ClassifiedLine, LineKind};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Split `text` into the lines the parser looks at: trimmed, blanks dropped.
///
/// A byte-order mark counts as whitespace so a BOM-prefixed file still
/// starts with its first question.
pub fn working_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty())
}

fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Parse every multiple-choice question found in `text`.
///
/// Never fails. Unrecognised lines, and option/answer/explanation lines seen
/// before the first question, are ignored. Repeated answer or explanation
/// lines within one question overwrite the earlier value.
pub fn parse_mcqs(text: &str) -> Vec<Question> {
    let acc = working_lines(text).fold(Accumulator::default(), Accumulator::feed);

    debug!(
        questions = acc.flushed.len() + usize::from(acc.current.is_some()),
        discarded = acc.discarded,
        "parsed document text"
    );

    acc.finish()
}

#[derive(Default)]
struct Accumulator {
    flushed: Vec<Question>,
    current: Option<Question>,
    discarded: usize,
}

impl Accumulator {
    fn feed(self, line: &str) -> Self {
        match classify(line) {
            Some(classified) => self.apply(classified),
            None => self.discard(),
        }
    }

    fn apply(mut self, line: ClassifiedLine<'_>) -> Self {
        if line.kind == LineKind::QuestionStart {
            self.flush();
            self.current = Some(Question::new(line.payload));
            return self;
        }

        let Some(question) = self.current.as_mut() else {
            return self.discard();
        };

        match line.kind {
            LineKind::Option => question.options.push(line.payload.to_string()),
            LineKind::Answer => question.answer = Some(line.payload.to_string()),
            LineKind::Explanation => question.explanation = Some(line.payload.to_string()),
            LineKind::QuestionStart => unreachable!("handled above"),
        }

        self
    }

    fn discard(mut self) -> Self {
        self.discarded += 1;
        self
    }

    fn flush(&mut self) {
        if let Some(question) = self.current.take() {
            self.flushed.push(question);
        }
    }

    fn finish(mut self) -> Vec<Question> {
        self.flush();
        self.flushed
    }
}
