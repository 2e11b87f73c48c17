//! Multiple choice question records and rendering messages
//!
//! This module implements the multiple choice question type: a category
//! label, a prompt, and a fixed set of answer options of which exactly one
//! is correct. It also defines the messages a display needs to render a
//! question and to reflect a changed selection.

use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::score::Progress;

type ValidationResult = garde::Result;

/// Validates that the correct option index refers to an existing option
///
/// Options are fixed at [`crate::constants::multiple_choice::OPTION_COUNT`]
/// entries, so the index only needs to be checked against that count.
///
/// # Arguments
///
/// * `val` - The correct option index to validate
/// * `_ctx` - The validation context (unused)
///
/// # Errors
///
/// Returns a `garde::Error` if the index is outside the option range.
fn validate_correct_option(val: &usize, _ctx: &()) -> ValidationResult {
    if *val < crate::constants::multiple_choice::OPTION_COUNT {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "correct option index {val} is outside of the bounds [0,{})",
            crate::constants::multiple_choice::OPTION_COUNT,
        )))
    }
}

/// A single multiple choice question record
///
/// Questions are immutable configuration data: once loaded into a
/// [`crate::quiz::config::Quiz`] they are only ever read. The options keep
/// a stable, deterministic order; displays must render them in sequence.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Question {
    /// Short category label shown alongside the question
    #[garde(length(max = crate::constants::multiple_choice::MAX_CATEGORY_LENGTH))]
    category: String,
    /// The question text presented to the user
    #[garde(length(min = crate::constants::multiple_choice::MIN_PROMPT_LENGTH, max = crate::constants::multiple_choice::MAX_PROMPT_LENGTH))]
    prompt: String,
    /// The ordered answer options, exactly four of them
    #[garde(
        length(equal = crate::constants::multiple_choice::OPTION_COUNT),
        inner(length(max = crate::constants::option_text::MAX_LENGTH))
    )]
    options: Vec<String>,
    /// Index of the single correct option
    #[garde(custom(validate_correct_option))]
    correct_option: usize,
}

/// Update messages sent to the display while a question is on screen
///
/// These messages inform the display about a newly presented question or a
/// changed selection on the current question. The advance control's label
/// ("Finish" on the last question, "Next" otherwise) and its disabled state
/// derive from `index`/`count` and the current selection.
#[derive(Debug, Serialize, Clone)]
pub enum UpdateMessage {
    /// Announces the question at `index`, replacing the previous screen
    QuestionAnnouncement {
        /// Index of the current question (0-based)
        index: usize,
        /// Total number of questions in the quiz
        count: usize,
        /// Category label of the question
        category: String,
        /// The question text being asked
        prompt: String,
        /// The answer options in display order
        options: Vec<String>,
        /// Progress over the whole quiz
        progress: Progress,
    },
    /// Reports a changed selection on the current question
    SelectionUpdate {
        /// The option index that is now selected
        selected: usize,
        /// Progress over the whole quiz
        progress: Progress,
    },
}

/// Synchronization message for a display attaching during a question
///
/// Carries the complete question view including the current selection,
/// allowing a display to render from scratch mid-session.
#[skip_serializing_none]
#[derive(Debug, Serialize, Clone)]
pub enum SyncMessage {
    /// Synchronizes the full question screen
    Question {
        /// Index of the current question (0-based)
        index: usize,
        /// Total number of questions in the quiz
        count: usize,
        /// Category label of the question
        category: String,
        /// The question text being asked
        prompt: String,
        /// The answer options in display order
        options: Vec<String>,
        /// The currently selected option, if any
        selected: Option<usize>,
        /// Progress over the whole quiz
        progress: Progress,
    },
}

impl Question {
    /// Creates a new question record
    ///
    /// The record is not validated on construction; run
    /// [`garde::Validate::validate`] at the configuration boundary.
    ///
    /// # Arguments
    ///
    /// * `category` - Short category label
    /// * `prompt` - The question text
    /// * `options` - The ordered answer options
    /// * `correct_option` - Index of the single correct option
    pub fn new(
        category: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
    ) -> Self {
        Self {
            category: category.into(),
            prompt: prompt.into(),
            options,
            correct_option,
        }
    }

    /// Returns the category label
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the question text
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the answer options in display order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns the index of the correct option
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    /// Checks whether a recorded selection answers this question correctly
    ///
    /// An unset selection counts as non-matching.
    ///
    /// # Arguments
    ///
    /// * `selection` - The recorded selection for this question, if any
    pub fn is_correct(&self, selection: Option<usize>) -> bool {
        selection == Some(self.correct_option)
    }

    /// Builds the announcement message for presenting this question
    ///
    /// # Arguments
    ///
    /// * `index` - Index of this question within the quiz
    /// * `count` - Total number of questions in the quiz
    /// * `progress` - Progress over the whole quiz
    pub fn announcement(&self, index: usize, count: usize, progress: Progress) -> UpdateMessage {
        UpdateMessage::QuestionAnnouncement {
            index,
            count,
            category: self.category.clone(),
            prompt: self.prompt.clone(),
            options: self.options.clone(),
            progress,
        }
    }

    /// Builds the synchronization message for this question
    ///
    /// # Arguments
    ///
    /// * `index` - Index of this question within the quiz
    /// * `count` - Total number of questions in the quiz
    /// * `selected` - The currently recorded selection, if any
    /// * `progress` - Progress over the whole quiz
    pub fn state_message(
        &self,
        index: usize,
        count: usize,
        selected: Option<usize>,
        progress: Progress,
    ) -> SyncMessage {
        SyncMessage::Question {
            index,
            count,
            category: self.category.clone(),
            prompt: self.prompt.clone(),
            options: self.options.clone(),
            selected,
            progress,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use garde::Validate;

    fn create_test_question() -> Question {
        Question::new(
            "Networking",
            "What does HTTP stand for?",
            vec![
                "HyperText Transfer Protocol".to_string(),
                "HyperText Transmission Program".to_string(),
                "High Transfer Text Protocol".to_string(),
                "Hyper Transfer Text Process".to_string(),
            ],
            0,
        )
    }

    #[test]
    fn test_question_validation() {
        let question = create_test_question();
        assert!(question.validate().is_ok());
    }

    #[test]
    fn test_question_prompt_empty() {
        let mut question = create_test_question();
        question.prompt = String::new();
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_question_prompt_too_long() {
        let mut question = create_test_question();
        question.prompt =
            "a".repeat(crate::constants::multiple_choice::MAX_PROMPT_LENGTH + 1);
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_question_category_too_long() {
        let mut question = create_test_question();
        question.category =
            "a".repeat(crate::constants::multiple_choice::MAX_CATEGORY_LENGTH + 1);
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_question_wrong_option_count() {
        let mut question = create_test_question();
        question.options.pop();
        assert!(question.validate().is_err());

        question.options.push("Fifth".to_string());
        question.options.push("Sixth".to_string());
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_question_option_text_too_long() {
        let mut question = create_test_question();
        question.options[2] = "a".repeat(crate::constants::option_text::MAX_LENGTH + 1);
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_question_correct_option_out_of_range() {
        let mut question = create_test_question();
        question.correct_option = crate::constants::multiple_choice::OPTION_COUNT;
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_is_correct() {
        let question = create_test_question();

        assert!(question.is_correct(Some(0)));
        assert!(!question.is_correct(Some(1)));
        assert!(!question.is_correct(None));
    }

    #[test]
    fn test_announcement_contents() {
        let question = create_test_question();
        let progress = Progress {
            answered: 0,
            total: 6,
            percent: 0,
        };

        let UpdateMessage::QuestionAnnouncement {
            index,
            count,
            category,
            prompt,
            options,
            progress,
        } = question.announcement(2, 6, progress)
        else {
            panic!("announcement built the wrong message");
        };

        assert_eq!(index, 2);
        assert_eq!(count, 6);
        assert_eq!(category, "Networking");
        assert_eq!(prompt, "What does HTTP stand for?");
        assert_eq!(options.len(), 4);
        assert_eq!(progress.answered, 0);
    }

    #[test]
    fn test_state_message_carries_selection() {
        let question = create_test_question();
        let progress = Progress {
            answered: 3,
            total: 6,
            percent: 50,
        };

        let SyncMessage::Question { selected, .. } =
            question.state_message(2, 6, Some(1), progress);
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn test_sync_message_serializes_without_null_selection() {
        let question = create_test_question();
        let progress = Progress {
            answered: 0,
            total: 6,
            percent: 0,
        };

        let json = serde_json::to_string(&question.state_message(0, 6, None, progress)).unwrap();
        assert!(!json.contains("\"selected\""));
    }
}
