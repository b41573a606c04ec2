use serde::{Deserialize, Serialize};

/// A multiple-choice question recovered from document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question line, including its leading ordinal (`"1. ..."`).
    pub prompt: String,
    /// Option lines in document order, labels included (`"A. ..."`).
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl Question {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: Vec::new(),
            answer: None,
            explanation: None,
        }
    }

    /// Whether choosing `option` scores a point.
    ///
    /// This is a prefix match: an answer of `"B"` accepts `"B. Paris"`, but
    /// also any other option text that happens to start with `B`. A question
    /// without an answer never scores.
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer
            .as_deref()
            .is_some_and(|answer| option.starts_with(answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital_question() -> Question {
        Question {
            prompt: "1. What is the capital of France?".to_string(),
            options: vec!["A. Berlin".to_string(), "B. Paris".to_string()],
            answer: Some("B. Paris".to_string()),
            explanation: None,
        }
    }

    #[test]
    fn test_is_correct_prefix_match() {
        let question = capital_question();
        assert!(question.is_correct("B. Paris"));
        assert!(!question.is_correct("A. Berlin"));
    }

    #[test]
    fn test_short_answer_matches_labelled_option() {
        let mut question = capital_question();
        question.answer = Some("B".to_string());
        assert!(question.is_correct("B. Paris"));
        // Partial matches are accepted too.
        assert!(question.is_correct("Banana"));
    }

    #[test]
    fn test_missing_answer_never_scores() {
        let mut question = capital_question();
        question.answer = None;
        assert!(!question.is_correct("B. Paris"));
        assert!(!question.is_correct(""));
    }

    #[test]
    fn test_json_missing_fields_default() {
        let question: Question = serde_json::from_str(r#"{"prompt":"3. Empty?"}"#).unwrap();
        assert_eq!(question, Question::new("3. Empty?"));
    }
}
