//! Built-in question bank
//!
//! A ready-made bank of general web and computing questions, usable as a
//! default quiz or as realistic fixture data in tests.

use super::{config::Quiz, multiple_choice::Question};

/// Returns the built-in web basics question bank
///
/// Six questions across web, programming, and networking categories. The
/// returned configuration passes validation as-is.
pub fn web_basics() -> Quiz {
    Quiz::new(
        "Web Basics",
        vec![
            Question::new(
                "Web Basics",
                "What does HTML stand for?",
                vec![
                    "HyperText Markup Language".to_string(),
                    "HighText Machine Language".to_string(),
                    "Hyperlink and Text Markup Language".to_string(),
                    "Home Tool Markup Language".to_string(),
                ],
                0,
            ),
            Question::new(
                "CSS",
                "Which CSS property controls the text size?",
                vec![
                    "font-style".to_string(),
                    "text-size".to_string(),
                    "font-size".to_string(),
                    "text-style".to_string(),
                ],
                2,
            ),
            Question::new(
                "JavaScript",
                "Which keyword is used to declare a block-scoped variable?",
                vec![
                    "var".to_string(),
                    "let".to_string(),
                    "define".to_string(),
                    "static".to_string(),
                ],
                1,
            ),
            Question::new(
                "General",
                "Which of the following is NOT a programming language?",
                vec![
                    "Python".to_string(),
                    "Java".to_string(),
                    "HTML".to_string(),
                    "C++".to_string(),
                ],
                2,
            ),
            Question::new(
                "Computer Science",
                "What is the time complexity of binary search in a sorted array?",
                vec![
                    "O(n)".to_string(),
                    "O(log n)".to_string(),
                    "O(n log n)".to_string(),
                    "O(1)".to_string(),
                ],
                1,
            ),
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
            ),
        ],
    )
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use garde::Validate;

    #[test]
    fn test_web_basics_is_valid() {
        assert!(web_basics().validate().is_ok());
    }

    #[test]
    fn test_web_basics_shape() {
        let quiz = web_basics();

        assert_eq!(quiz.len(), 6);
        for question in &quiz.questions {
            assert_eq!(question.options().len(), 4);
            assert!(question.correct_option() < question.options().len());
        }
    }

    #[test]
    fn test_web_basics_answers() {
        let quiz = web_basics();

        assert_eq!(quiz.question(0).unwrap().correct_option(), 0);
        assert_eq!(quiz.question(1).unwrap().correct_option(), 2);
        assert_eq!(quiz.question(5).unwrap().correct_option(), 0);
        assert!(quiz.question(4).unwrap().is_correct(Some(1)));
    }
}
