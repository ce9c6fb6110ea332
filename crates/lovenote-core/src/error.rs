//! Error types for the Lovenote card

use thiserror::Error;

/// Main error type for card operations
#[derive(Error, Debug)]
pub enum CardError {
    /// An answer was submitted after the quiz reached its terminal state
    #[error("Quiz is already finished")]
    QuizFinished,

    /// The selected option does not exist on the current question
    #[error("Option {selected} is out of range for question with {available} options")]
    OptionOutOfRange { selected: usize, available: usize },

    /// A quiz was constructed with no questions
    #[error("Quiz requires at least one question")]
    EmptyQuiz,

    /// Pass ratio outside the meaningful (0.0, 1.0] range
    #[error("Pass ratio {0} is not in (0.0, 1.0]")]
    InvalidPassRatio(f64),

    /// A question referenced a correct-answer index outside its option list
    #[error("Question '{prompt}' marks answer {answer} but has {available} options")]
    InvalidAnswerIndex {
        prompt: String,
        answer: usize,
        available: usize,
    },
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::OptionOutOfRange {
            selected: 7,
            available: 4,
        };
        assert_eq!(
            format!("{}", err),
            "Option 7 is out of range for question with 4 options"
        );
    }

    #[test]
    fn test_finished_display() {
        assert_eq!(format!("{}", CardError::QuizFinished), "Quiz is already finished");
    }
}
