//! Core quiz state machine
//!
//! This module contains the controller driving a quiz session through its
//! three phases: not started, answering, and finished. The controller owns
//! the question bank and the scorecard, applies commands coming in from the
//! presentation layer, and pushes rendering messages back out through the
//! [`Screen`] boundary.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

use crate::{
    quiz::config::Quiz,
    score::{QuestionResult, ScoreMessage, Scorecard},
    screen::Screen,
};

/// Represents the current phase of the quiz session
///
/// The session progresses from the start screen through the questions to
/// the result screen; restarting returns it to the start screen. The final
/// score lives inside [`Phase::Finished`], so a score exists exactly when
/// the session has concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Start screen, before any question has been shown
    NotStarted,
    /// A question is on screen and accepting a selection
    Answering {
        /// Index of the question currently presented
        current: usize,
    },
    /// The quiz has concluded and the result screen is shown
    Finished {
        /// Number of correctly answered questions
        score: usize,
    },
}

/// Commands received from the presentation layer
///
/// Each discrete user input (a click, a key press) maps to exactly one
/// command; the controller processes it synchronously and to completion
/// before the next one arrives.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a fresh run, from any phase
    Start,
    /// Select an option on the current question
    SelectOption(usize),
    /// Move past the current question, or finish on the last one
    Advance,
    /// Return to the start screen
    Restart,
}

/// Whether a command changed the session state
///
/// Commands that arrive in a phase where they do not apply are forgiven
/// rather than surfaced to the user; the explicit outcome keeps that
/// contract observable for callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command was applied and state changed accordingly
    Applied,
    /// The command did not apply in the current phase; state is unchanged
    Ignored,
}

/// Errors for commands that cannot arise from a well-behaved display
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An option selection referred to an option that does not exist
    #[error("option index {index} is out of range for a question with {limit} options")]
    OptionOutOfRange {
        /// The offending option index
        index: usize,
        /// Number of options on the current question
        limit: usize,
    },
}

/// Update messages for session-level screen changes
///
/// Question-level messages live in [`crate::quiz::multiple_choice`]; these
/// cover the start and result screens.
#[derive(Debug, Serialize, Clone)]
pub enum UpdateMessage {
    /// Show the start screen
    StartScreen,
    /// Show the result screen with the final summary
    Summary(SummaryMessage),
}

/// Sync messages for a display attaching outside a question
#[derive(Debug, Serialize, Clone)]
pub enum SyncMessage {
    /// Sync onto the start screen
    StartScreen,
    /// Sync onto the result screen with the final summary
    Summary(SummaryMessage),
}

/// Summary information shown on the result screen
#[derive(Debug, Serialize, Clone)]
pub struct SummaryMessage {
    /// Final score with total and percentage
    pub score: ScoreMessage,
    /// Per-question outcome in question order
    pub results: Vec<QuestionResult>,
}

/// A queryable snapshot of the session state
///
/// Derived values (`answered_count`, `progress_percent`) are computed from
/// the scorecard at snapshot time, never stored.
#[skip_serializing_none]
#[derive(Debug, Serialize, Clone)]
pub struct Snapshot {
    /// Current phase of the session
    pub phase: Phase,
    /// Index of the current question while answering
    pub current_index: Option<usize>,
    /// Recorded selection per question, in question order
    pub selections: Vec<Option<usize>>,
    /// Final score, present once the session has concluded
    pub score: Option<usize>,
    /// Number of questions with a recorded selection
    pub answered_count: usize,
    /// Rounded percentage of answered questions
    pub progress_percent: u8,
}

/// The quiz session controller
///
/// Owns the immutable question bank and the single mutable scorecard of
/// the session. All mutation happens synchronously inside [`apply`]; the
/// scorecard is never shared.
///
/// [`apply`]: Controller::apply
#[derive(Debug, Serialize, Deserialize)]
pub struct Controller {
    /// The question bank, injected at construction
    quiz: Quiz,
    /// Selections for the current run
    scorecard: Scorecard,
    /// Current phase of the session
    phase: Phase,
}

impl Controller {
    /// Creates a controller for the given question bank
    ///
    /// The bank is expected to have passed [`garde::Validate::validate`];
    /// in particular it must be non-empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use popquiz::controller::{Controller, Phase};
    /// use popquiz::quiz::builtin;
    ///
    /// let controller = Controller::new(builtin::web_basics());
    /// assert_eq!(controller.phase(), Phase::NotStarted);
    /// ```
    pub fn new(quiz: Quiz) -> Self {
        let scorecard = Scorecard::new(quiz.len());

        Self {
            quiz,
            scorecard,
            phase: Phase::NotStarted,
        }
    }

    /// Returns the current phase of the session
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the question bank this session runs on
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// Applies a command from the presentation layer
    ///
    /// Mutates the session state and announces the resulting screen change
    /// through `screen`. Commands that do not apply in the current phase
    /// leave the state untouched and report [`Outcome::Ignored`].
    ///
    /// # Arguments
    ///
    /// * `command` - The command to process
    /// * `screen` - The display to announce changes to
    ///
    /// # Errors
    ///
    /// Returns [`Error::OptionOutOfRange`] for a selection index no
    /// well-behaved display can produce; the state is left unchanged.
    pub fn apply<S: Screen>(&mut self, command: Command, screen: &S) -> Result<Outcome, Error> {
        match command {
            Command::Start => {
                self.start(screen);
                Ok(Outcome::Applied)
            }
            Command::SelectOption(index) => self.select_option(index, screen),
            Command::Advance => Ok(self.advance(screen)),
            Command::Restart => Ok(self.restart(screen)),
        }
    }

    /// Begins a fresh run
    ///
    /// Valid from any phase: replaces the scorecard with an all-unset one,
    /// moves to the first question, and announces it.
    fn start<S: Screen>(&mut self, screen: &S) {
        self.scorecard = Scorecard::new(self.quiz.len());
        self.phase = Phase::Answering { current: 0 };
        self.announce_question(0, screen);
    }

    /// Records a selection on the current question
    ///
    /// Re-selecting overwrites the prior choice and never advances the
    /// session. Outside the answering phase the command is ignored.
    fn select_option<S: Screen>(&mut self, index: usize, screen: &S) -> Result<Outcome, Error> {
        let Phase::Answering { current } = self.phase else {
            debug!("ignoring option selection outside the answering phase");
            return Ok(Outcome::Ignored);
        };

        let question = self
            .quiz
            .question(current)
            .expect("current question index stays within the bank");

        let limit = question.options().len();
        if index >= limit {
            return Err(Error::OptionOutOfRange { index, limit });
        }

        self.scorecard.select(current, index);

        screen.send_message(
            &crate::quiz::multiple_choice::UpdateMessage::SelectionUpdate {
                selected: index,
                progress: self.scorecard.progress(),
            }
            .into(),
        );

        Ok(Outcome::Applied)
    }

    /// Moves past the current question
    ///
    /// Blocked while the current question has no selection. On the last
    /// question this concludes the run, computes the score, and announces
    /// the summary; otherwise the next question is announced.
    fn advance<S: Screen>(&mut self, screen: &S) -> Outcome {
        let Phase::Answering { current } = self.phase else {
            debug!("ignoring advance outside the answering phase");
            return Outcome::Ignored;
        };

        if self.scorecard.selection(current).is_none() {
            debug!("ignoring advance on unanswered question {current}");
            return Outcome::Ignored;
        }

        let next = current + 1;
        if next == self.quiz.len() {
            let score = self.scorecard.score_message(&self.quiz).points;
            self.phase = Phase::Finished { score };
            screen.send_message(&UpdateMessage::Summary(self.summary_message()).into());
        } else {
            self.phase = Phase::Answering { current: next };
            self.announce_question(next, screen);
        }

        Outcome::Applied
    }

    /// Returns to the start screen
    ///
    /// Valid from the finished phase and, as an abandon path, while
    /// answering. The scorecard is deliberately left alone: the start
    /// screen itself discards nothing, the reset happens in [`start`].
    ///
    /// [`start`]: Command::Start
    fn restart<S: Screen>(&mut self, screen: &S) -> Outcome {
        match self.phase {
            Phase::NotStarted => {
                debug!("ignoring restart on the start screen");
                Outcome::Ignored
            }
            Phase::Answering { .. } | Phase::Finished { .. } => {
                self.phase = Phase::NotStarted;
                screen.send_message(&UpdateMessage::StartScreen.into());
                Outcome::Applied
            }
        }
    }

    /// Announces the question at `index` to the display
    fn announce_question<S: Screen>(&self, index: usize, screen: &S) {
        let question = self
            .quiz
            .question(index)
            .expect("current question index stays within the bank");

        screen.send_message(
            &question
                .announcement(index, self.quiz.len(), self.scorecard.progress())
                .into(),
        );
    }

    /// Builds the final summary for the result screen
    fn summary_message(&self) -> SummaryMessage {
        SummaryMessage {
            score: self.scorecard.score_message(&self.quiz),
            results: self.scorecard.question_results(&self.quiz),
        }
    }

    /// Sends the message necessary to synchronize a display's view
    ///
    /// Used when a display attaches (or re-attaches) mid-session: the
    /// message carries the complete current screen, including the current
    /// selection while a question is up.
    ///
    /// # Arguments
    ///
    /// * `screen` - The display to synchronize
    pub fn sync<S: Screen>(&self, screen: &S) {
        match self.phase {
            Phase::NotStarted => screen.send_state(&SyncMessage::StartScreen.into()),
            Phase::Answering { current } => {
                let question = self
                    .quiz
                    .question(current)
                    .expect("current question index stays within the bank");

                screen.send_state(
                    &question
                        .state_message(
                            current,
                            self.quiz.len(),
                            self.scorecard.selection(current),
                            self.scorecard.progress(),
                        )
                        .into(),
                );
            }
            Phase::Finished { .. } => {
                screen.send_state(&SyncMessage::Summary(self.summary_message()).into());
            }
        }
    }

    /// Returns a snapshot of the current session state
    pub fn snapshot(&self) -> Snapshot {
        let progress = self.scorecard.progress();

        Snapshot {
            phase: self.phase,
            current_index: match self.phase {
                Phase::Answering { current } => Some(current),
                _ => None,
            },
            selections: self.scorecard.selections().to_vec(),
            score: match self.phase {
                Phase::Finished { score } => Some(score),
                _ => None,
            },
            answered_count: progress.answered,
            progress_percent: progress.percent,
        }
    }
}
