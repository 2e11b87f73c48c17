//! Presentation layer boundary
//!
//! This module defines the trait for pushing rendering messages from the
//! quiz engine to whatever displays it (a terminal UI, a web view, a test
//! harness). The screen abstraction keeps the state machine independently
//! testable without any UI attached.

use super::{SyncMessage, UpdateMessage};

/// Trait for sending rendering messages to a display
///
/// This trait abstracts the mechanism used to present the quiz to the user.
/// Implementations might draw to a terminal, forward JSON to a web page,
/// or simply record messages for assertions in tests.
///
/// Text values taken from messages and placed into markup must be escaped
/// with [`crate::markup::escape`] before rendering, since question and
/// option text can in principle contain user-influenced content.
pub trait Screen {
    /// Sends an update message to the display
    ///
    /// Update messages notify the display about changes that affect the
    /// currently shown screen, such as a newly announced question or a
    /// changed selection.
    ///
    /// # Arguments
    ///
    /// * `message` - The update message to render
    fn send_message(&self, message: &UpdateMessage);

    /// Sends a full state synchronization message to the display
    ///
    /// Sync messages carry the complete current view, typically used when
    /// a display attaches (or re-attaches) mid-session and needs to render
    /// from scratch.
    ///
    /// # Arguments
    ///
    /// * `state` - The synchronization message to render
    fn send_state(&self, state: &SyncMessage);
}
