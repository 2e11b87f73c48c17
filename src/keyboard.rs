//! Keyboard input routing
//!
//! This module turns key events forwarded by the presentation layer into
//! [`Command`]s. Arrow keys move a clamped focus across the answer options,
//! Enter or Space selects the focused option, and the advance shortcut
//! moves on only when the display has an answer to advance past.

use serde::Deserialize;

use crate::controller::Command;

/// Key events the quiz reacts to
///
/// The presentation layer translates its native key codes into this enum
/// and feeds them through [`OptionFocus::route`]; everything else is for
/// the display to handle (or drop) itself.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move focus to the previous option
    ArrowUp,
    /// Move focus to the next option
    ArrowDown,
    /// Move focus to the previous option
    ArrowLeft,
    /// Move focus to the next option
    ArrowRight,
    /// Select the focused option
    Enter,
    /// Select the focused option
    Space,
    /// Advance past the current question (the `n` shortcut)
    Advance,
}

/// Tracks which answer option currently holds keyboard focus
///
/// Focus moves are clamped to the option range rather than wrapping,
/// matching directional navigation in a vertical option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionFocus {
    /// Index of the focused option
    focused: usize,
    /// Number of options on the current question
    count: usize,
}

impl OptionFocus {
    /// Creates a focus state on the first of `count` options
    ///
    /// # Arguments
    ///
    /// * `count` - Number of options on the current question
    pub fn new(count: usize) -> Self {
        Self { focused: 0, count }
    }

    /// Returns the index of the focused option
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Routes a key event, moving focus or producing a command
    ///
    /// # Arguments
    ///
    /// * `key` - The key event to route
    /// * `advance_enabled` - Whether the current question has a selection,
    ///   gating the advance shortcut
    ///
    /// # Returns
    ///
    /// The command to feed into the controller, if the key produced one
    pub fn route(&mut self, key: Key, advance_enabled: bool) -> Option<Command> {
        match key {
            Key::ArrowDown | Key::ArrowRight => {
                self.focused = (self.focused + 1).min(self.count.saturating_sub(1));
                None
            }
            Key::ArrowUp | Key::ArrowLeft => {
                self.focused = self.focused.saturating_sub(1);
                None
            }
            Key::Enter | Key::Space => Some(Command::SelectOption(self.focused)),
            Key::Advance => advance_enabled.then_some(Command::Advance),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_focus_moves_and_clamps_at_the_end() {
        let mut focus = OptionFocus::new(4);

        focus.route(Key::ArrowDown, false);
        focus.route(Key::ArrowRight, false);
        assert_eq!(focus.focused(), 2);

        focus.route(Key::ArrowDown, false);
        focus.route(Key::ArrowDown, false);
        assert_eq!(focus.focused(), 3);
    }

    #[test]
    fn test_focus_clamps_at_the_start() {
        let mut focus = OptionFocus::new(4);

        focus.route(Key::ArrowUp, false);
        assert_eq!(focus.focused(), 0);

        focus.route(Key::ArrowDown, false);
        focus.route(Key::ArrowLeft, false);
        focus.route(Key::ArrowLeft, false);
        assert_eq!(focus.focused(), 0);
    }

    #[test]
    fn test_enter_and_space_select_focused_option() {
        let mut focus = OptionFocus::new(4);
        focus.route(Key::ArrowDown, false);

        assert_eq!(
            focus.route(Key::Enter, false),
            Some(Command::SelectOption(1))
        );
        assert_eq!(
            focus.route(Key::Space, false),
            Some(Command::SelectOption(1))
        );
    }

    #[test]
    fn test_advance_shortcut_is_gated() {
        let mut focus = OptionFocus::new(4);

        assert_eq!(focus.route(Key::Advance, false), None);
        assert_eq!(focus.route(Key::Advance, true), Some(Command::Advance));
    }

    #[test]
    fn test_arrow_keys_produce_no_command() {
        let mut focus = OptionFocus::new(4);

        assert_eq!(focus.route(Key::ArrowDown, true), None);
        assert_eq!(focus.route(Key::ArrowUp, true), None);
    }

    #[test]
    fn test_empty_option_list_stays_put() {
        let mut focus = OptionFocus::new(0);

        focus.route(Key::ArrowDown, false);
        assert_eq!(focus.focused(), 0);
    }
}
