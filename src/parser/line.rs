//! Line classification.

use std::sync::LazyLock;

use regex::Regex;

/// Category of a line that carries question data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `1. What is ...?`
    QuestionStart,
    /// `A. Berlin`
    Option,
    /// `Answer: B. Paris`
    Answer,
    /// `Explanation: Paris is ...`
    Explanation,
}

/// A recognised line together with the text it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub kind: LineKind,
    /// The full line for questions and options, the text after the label
    /// for answers and explanations.
    pub payload: &'a str,
}

struct LineRule {
    kind: LineKind,
    pattern: Regex,
    strip_label: bool,
}

impl LineRule {
    fn new(kind: LineKind, pattern: &str, strip_label: bool) -> Self {
        Self {
            kind,
            pattern: Regex::new(pattern).expect("line patterns are valid"),
            strip_label,
        }
    }

    fn apply<'a>(&self, line: &'a str) -> Option<ClassifiedLine<'a>> {
        let label = self.pattern.find(line)?;
        let payload = if self.strip_label {
            &line[label.end()..]
        } else {
            line
        };

        Some(ClassifiedLine {
            kind: self.kind,
            payload,
        })
    }
}

// Evaluated top to bottom, first match wins.
static RULES: LazyLock<[LineRule; 4]> = LazyLock::new(|| {
    [
        LineRule::new(LineKind::QuestionStart, r"^[0-9]+\.", false),
        LineRule::new(LineKind::Option, r"^[A-D]\.", false),
        LineRule::new(LineKind::Answer, r"^(?i-u:answer):\s*", true),
        LineRule::new(LineKind::Explanation, r"^(?i-u:explanation):\s*", true),
    ]
});

/// Classify a single trimmed line.
///
/// Returns `None` for lines that carry no question data.
pub fn classify(line: &str) -> Option<ClassifiedLine<'_>> {
    RULES.iter().find_map(|rule| rule.apply(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(line: &str) -> Option<LineKind> {
        classify(line).map(|classified| classified.kind)
    }

    #[test]
    fn test_question_start() {
        assert_eq!(kind_of("1. What is 2+2?"), Some(LineKind::QuestionStart));
        assert_eq!(kind_of("123.No space"), Some(LineKind::QuestionStart));
        assert_eq!(kind_of("12 without period"), None);
        assert_eq!(kind_of("Question 1. Nope"), None);
    }

    #[test]
    fn test_question_start_keeps_full_line() {
        let line = classify("7. Pick one").unwrap();
        assert_eq!(line.payload, "7. Pick one");
    }

    #[test]
    fn test_question_start_requires_ascii_digits() {
        // Arabic-Indic digits are not ordinals here.
        assert_eq!(kind_of("١. سؤال"), None);
    }

    #[test]
    fn test_option_labels() {
        for line in ["A. Berlin", "B. Paris", "C.Madrid", "D. Rome"] {
            assert_eq!(kind_of(line), Some(LineKind::Option), "{line}");
        }
        assert_eq!(kind_of("E. Out of range"), None);
        assert_eq!(kind_of("a. lowercase"), None);
        assert_eq!(kind_of("A) paren"), None);
    }

    #[test]
    fn test_answer_label_is_case_insensitive() {
        for line in ["Answer: B. Paris", "answer: B. Paris", "ANSWER:B. Paris"] {
            let classified = classify(line).unwrap();
            assert_eq!(classified.kind, LineKind::Answer);
            assert_eq!(classified.payload, "B. Paris");
        }
    }

    #[test]
    fn test_answer_keeps_remainder_casing() {
        let classified = classify("aNsWeR:   b. paris").unwrap();
        assert_eq!(classified.payload, "b. paris");
    }

    #[test]
    fn test_explanation_label() {
        let classified = classify("EXPLANATION: Because.").unwrap();
        assert_eq!(classified.kind, LineKind::Explanation);
        assert_eq!(classified.payload, "Because.");
    }

    #[test]
    fn test_bare_label_has_empty_payload() {
        let classified = classify("Answer:").unwrap();
        assert_eq!(classified.kind, LineKind::Answer);
        assert_eq!(classified.payload, "");
    }

    #[test]
    fn test_labels_fold_ascii_case_only() {
        // U+017F LATIN SMALL LETTER LONG S folds to `s` under Unicode rules.
        assert_eq!(kind_of("Anſwer: B"), None);
        assert_eq!(kind_of("Explanation: fine"), Some(LineKind::Explanation));
    }

    #[test]
    fn test_unrecognised_lines() {
        assert_eq!(kind_of("Chapter 3"), None);
        assert_eq!(kind_of("The answer: maybe"), None);
        assert_eq!(kind_of("Answer - B"), None);
    }
}
