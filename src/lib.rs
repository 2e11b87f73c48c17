//! # Popquiz Engine Library
//!
//! This library provides the core logic for a single-session multiple
//! choice quiz: a validated question bank, the state machine driving the
//! session from start screen through the questions to the result screen,
//! scoring, and the message contract a display renders from.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
use serde::Serialize;

pub mod constants;

pub mod controller;
pub mod keyboard;
pub mod markup;
pub mod quiz;
pub mod score;
pub mod screen;

/// Messages sent to update the display after a state change
///
/// This enum gathers all update messages the engine can emit, from the
/// session level (start and result screens) and from the question level
/// (announcements and selection changes).
#[derive(Debug, Serialize, Clone, derive_more::From)]
pub enum UpdateMessage {
    /// Session-level screen changes
    Controller(controller::UpdateMessage),
    /// Question-level updates
    MultipleChoice(quiz::multiple_choice::UpdateMessage),
}

impl UpdateMessage {
    /// Converts the update message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Messages sent to synchronize a display with the full current state
///
/// Sync messages carry the complete current screen so that a display
/// attaching mid-session can render without replaying prior updates.
#[derive(Debug, Serialize, Clone, derive_more::From)]
pub enum SyncMessage {
    /// Session-level screen synchronization
    Controller(controller::SyncMessage),
    /// Question-level synchronization
    MultipleChoice(quiz::multiple_choice::SyncMessage),
}

impl SyncMessage {
    /// Converts the sync message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_update_message_to_message() {
        let update_msg = UpdateMessage::Controller(controller::UpdateMessage::StartScreen);
        let json_str = update_msg.to_message();

        assert!(json_str.contains("Controller"));
        assert!(json_str.contains("StartScreen"));
    }

    #[test]
    fn test_question_update_message_to_message() {
        let quiz = quiz::builtin::web_basics();
        let question = quiz.question(0).unwrap();
        let update_msg: UpdateMessage = question
            .announcement(0, quiz.len(), score::Progress {
                answered: 0,
                total: quiz.len(),
                percent: 0,
            })
            .into();
        let json_str = update_msg.to_message();

        assert!(json_str.contains("MultipleChoice"));
        assert!(json_str.contains("QuestionAnnouncement"));
        assert!(json_str.contains("What does HTML stand for?"));
    }

    #[test]
    fn test_sync_message_to_message() {
        let sync_msg = SyncMessage::Controller(controller::SyncMessage::StartScreen);
        let json_str = sync_msg.to_message();

        assert!(json_str.contains("Controller"));
        assert!(json_str.contains("StartScreen"));
    }
}
