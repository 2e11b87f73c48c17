//! Scorecard and scoring functionality
//!
//! This module tracks the per-question selections made during a quiz run,
//! derives progress information from them, and computes the final score and
//! per-question results once the run concludes.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::quiz::config::Quiz;

/// Progress over the whole quiz, derived from the scorecard
///
/// The answered count covers every slot in the scorecard, not only the
/// questions passed by forward navigation; traversal is strictly sequential
/// so the two coincide, but the scorecard is the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Number of questions with a recorded selection
    pub answered: usize,
    /// Total number of questions in the quiz
    pub total: usize,
    /// Rounded percentage of answered questions
    pub percent: u8,
}

/// Final score information for a completed quiz run
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ScoreMessage {
    /// Number of correctly answered questions
    pub points: usize,
    /// Total number of questions in the quiz
    pub out_of: usize,
    /// Rounded percentage of correctly answered questions
    pub percent: u8,
}

/// Outcome of a single question in the final results breakdown
#[skip_serializing_none]
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    /// The option the user selected, if any
    pub selected: Option<usize>,
    /// The index of the correct option
    pub correct_option: usize,
    /// Whether the selection matched the correct option
    pub is_correct: bool,
}

/// Cached results of a concluded quiz run
#[derive(Debug, Clone)]
struct FinalSummary {
    /// Number of correctly answered questions
    score: usize,
    /// Per-question outcome in question order
    results: Vec<QuestionResult>,
}

/// Records the selections made during one quiz run
///
/// One slot per question, every slot unset until the user picks an option
/// for it. A scorecard is owned by the controller and replaced wholesale
/// when a new run starts; selections survive a return to the start screen
/// until then.
#[derive(Debug, Serialize, Deserialize)]
pub struct Scorecard {
    /// Recorded selection per question, in question order
    selections: Vec<Option<usize>>,

    /// Final summary, computed once the run concludes
    #[serde(skip)]
    final_summary: once_cell_serde::sync::OnceCell<FinalSummary>,
}

/// Rounded percentage of `part` out of `total`
fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    ((part as f64 / total as f64) * 100.0).round() as u8
}

impl Scorecard {
    /// Creates a scorecard with every slot unset
    ///
    /// # Arguments
    ///
    /// * `len` - Number of questions in the quiz
    pub fn new(len: usize) -> Self {
        Self {
            selections: vec![None; len],
            final_summary: once_cell_serde::sync::OnceCell::new(),
        }
    }

    /// Returns the number of slots in this scorecard
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Checks if this scorecard has no slots
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Returns the recorded selection for a question, if any
    ///
    /// # Arguments
    ///
    /// * `index` - The question index
    pub fn selection(&self, index: usize) -> Option<usize> {
        self.selections.get(index).copied().flatten()
    }

    /// Returns every recorded selection in question order
    pub fn selections(&self) -> &[Option<usize>] {
        &self.selections
    }

    /// Records a selection for a question, overwriting any prior choice
    ///
    /// # Arguments
    ///
    /// * `index` - The question index
    /// * `option` - The selected option index
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the scorecard. The controller only
    /// passes its current question index, which is in range by construction.
    pub fn select(&mut self, index: usize, option: usize) {
        self.selections[index] = Some(option);
    }

    /// Returns the number of questions with a recorded selection
    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    /// Derives the current progress over the whole quiz
    pub fn progress(&self) -> Progress {
        let answered = self.answered_count();
        let total = self.selections.len();

        Progress {
            answered,
            total,
            percent: percent(answered, total),
        }
    }

    /// Computes the final score and per-question results
    ///
    /// Pure function of the selections and the question bank: one point per
    /// slot whose selection matches the question's correct option, unset
    /// slots counting as non-matching.
    ///
    /// # Panics
    ///
    /// Panics if the scorecard length differs from the quiz length, which
    /// would violate the one-slot-per-question invariant.
    fn compute_final_summary(&self, quiz: &Quiz) -> FinalSummary {
        let results = self
            .selections
            .iter()
            .zip_eq(&quiz.questions)
            .map(|(selected, question)| QuestionResult {
                selected: *selected,
                correct_option: question.correct_option(),
                is_correct: question.is_correct(*selected),
            })
            .collect_vec();

        FinalSummary {
            score: results.iter().filter(|r| r.is_correct).count(),
            results,
        }
    }

    /// Gets or computes the final summary with caching
    ///
    /// Selections no longer change once the run concludes, so the summary
    /// is computed once and cached for subsequent calls.
    fn final_summary(&self, quiz: &Quiz) -> &FinalSummary {
        self.final_summary
            .get_or_init(|| self.compute_final_summary(quiz))
    }

    /// Returns the final score for a concluded run
    ///
    /// # Arguments
    ///
    /// * `quiz` - The question bank this scorecard was created for
    pub fn score_message(&self, quiz: &Quiz) -> ScoreMessage {
        let summary = self.final_summary(quiz);

        ScoreMessage {
            points: summary.score,
            out_of: quiz.len(),
            percent: percent(summary.score, quiz.len()),
        }
    }

    /// Returns the per-question results breakdown for a concluded run
    ///
    /// # Arguments
    ///
    /// * `quiz` - The question bank this scorecard was created for
    pub fn question_results(&self, quiz: &Quiz) -> Vec<QuestionResult> {
        self.final_summary(quiz).results.clone()
    }
}
