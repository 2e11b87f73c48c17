//! Configuration constants for the quiz engine
//!
//! This module contains the configuration limits and constraints used
//! throughout the engine to ensure data integrity and provide consistent
//! boundaries for question banks and their contents.

/// Quiz bank configuration constants
pub mod quiz {
    /// Maximum number of questions allowed in a single quiz
    pub const MAX_QUESTIONS_COUNT: usize = 100;
    /// Maximum length of a quiz title in characters
    pub const MAX_TITLE_LENGTH: usize = 200;
}

/// Multiple choice question configuration constants
pub mod multiple_choice {
    /// Minimum length of a question prompt
    pub const MIN_PROMPT_LENGTH: usize = 1;
    /// Maximum length of a question prompt
    pub const MAX_PROMPT_LENGTH: usize = 200;
    /// Maximum length of a question category label
    pub const MAX_CATEGORY_LENGTH: usize = 50;
    /// Exact number of answer options for a multiple choice question
    pub const OPTION_COUNT: usize = 4;
}

/// Option text configuration constants
pub mod option_text {
    /// Maximum length of answer option text in characters
    pub const MAX_LENGTH: usize = 200;
}
