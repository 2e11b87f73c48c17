//! Quiz bank configuration
//!
//! This module defines the top-level [`Quiz`] structure: a titled, ordered,
//! non-empty collection of multiple choice questions. A quiz is immutable
//! configuration data injected into the controller at construction.

use garde::Validate;
use serde::{Deserialize, Serialize};

use super::multiple_choice::Question;

/// A complete quiz configuration containing all questions
///
/// The question order is fixed: questions are presented strictly in
/// sequence, indexed `0..len()`.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct Quiz {
    /// The title of the quiz
    #[garde(length(max = crate::constants::quiz::MAX_TITLE_LENGTH))]
    title: String,

    /// The ordered collection of questions
    #[garde(length(min = 1, max = crate::constants::quiz::MAX_QUESTIONS_COUNT), dive)]
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Creates a new quiz configuration
    ///
    /// The configuration is not validated on construction; run
    /// [`garde::Validate::validate`] at the boundary where banks are loaded.
    ///
    /// # Arguments
    ///
    /// * `title` - The quiz title
    /// * `questions` - The ordered questions
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }

    /// Returns the quiz title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the number of questions in this quiz
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Checks if this quiz contains any questions
    ///
    /// A valid quiz is never empty; this exists for defensive checks at
    /// the configuration boundary.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the question at the given index, if it exists
    ///
    /// # Arguments
    ///
    /// * `index` - The question index
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn create_test_quiz() -> Quiz {
        crate::quiz::builtin::web_basics()
    }

    #[test]
    fn test_quiz_validation() {
        let quiz = create_test_quiz();
        assert!(quiz.validate().is_ok());
    }

    #[test]
    fn test_quiz_len_and_empty() {
        let quiz = create_test_quiz();
        assert_eq!(quiz.len(), 6);
        assert!(!quiz.is_empty());
    }

    #[test]
    fn test_quiz_empty_bank_invalid() {
        let empty = Quiz::new("Empty", vec![]);
        assert!(empty.is_empty());
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_quiz_title_too_long() {
        let mut quiz = create_test_quiz();
        quiz.title = "a".repeat(crate::constants::quiz::MAX_TITLE_LENGTH + 1);
        assert!(quiz.validate().is_err());
    }

    #[test]
    fn test_quiz_too_many_questions() {
        let mut quiz = create_test_quiz();
        let filler = quiz.questions[0].clone();
        quiz.questions = vec![filler; crate::constants::quiz::MAX_QUESTIONS_COUNT + 1];
        assert!(quiz.validate().is_err());
    }

    #[test]
    fn test_question_lookup() {
        let quiz = create_test_quiz();
        assert!(quiz.question(0).is_some());
        assert!(quiz.question(quiz.len()).is_none());
    }

    #[test]
    fn test_quiz_round_trips_through_json() {
        let quiz = create_test_quiz();
        let json = serde_json::to_string(&quiz).unwrap();
        let parsed: Quiz = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), quiz.len());
        assert_eq!(parsed.title(), quiz.title());
        assert_eq!(
            parsed.question(3).unwrap().correct_option(),
            quiz.question(3).unwrap().correct_option()
        );
    }
}
