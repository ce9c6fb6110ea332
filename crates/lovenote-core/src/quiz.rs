//! Quiz engine - the memory quiz that gates the letter.
//!
//! A strictly linear state machine: `Answering(i)` advances to
//! `Answering(i + 1)` on each submitted answer until the last question, at
//! which point the engine becomes `Terminal(passed)` and stays there. There
//! is no backtracking and no resubmission; a wrong answer simply scores zero
//! for that question.
//!
//! The pass/fail result is computed exactly once when the terminal state is
//! reached and stored, so callers can re-read it without recomputation.
//!
//! ## Example
//!
//! ```rust
//! use lovenote_core::quiz::{Progress, Question, QuizEngine};
//!
//! let questions = vec![
//!     Question::new("Where did we first meet?", &["Online", "A cafe"], 0),
//!     Question::new("What did I order?", &["Tea", "Coffee"], 1),
//! ];
//! let mut quiz = QuizEngine::new(questions, 0.75).unwrap();
//!
//! assert_eq!(quiz.submit_answer(0).unwrap(), Progress::Next(1));
//! match quiz.submit_answer(1).unwrap() {
//!     Progress::Finished(report) => assert!(report.passed),
//!     _ => unreachable!(),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// A single quiz question with an enumerated set of options.
///
/// Immutable once constructed; `answer` is the index of the correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to the player
    pub prompt: String,
    /// Ordered option texts; the UI renders one button per entry
    pub options: Vec<String>,
    /// Index into `options` of the correct answer
    pub answer: usize,
}

impl Question {
    /// Create a question from string literals
    pub fn new(prompt: &str, options: &[&str], answer: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer,
        }
    }

    /// Check that the correct-answer index points into the option list
    fn validate(&self) -> CardResult<()> {
        if self.answer >= self.options.len() {
            return Err(CardError::InvalidAnswerIndex {
                prompt: self.prompt.clone(),
                answer: self.answer,
                available: self.options.len(),
            });
        }
        Ok(())
    }
}

/// Final outcome of a completed quiz, computed once at completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizReport {
    /// Number of correctly answered questions
    pub score: usize,
    /// Total number of questions
    pub total: usize,
    /// Minimum score required to pass
    pub threshold: usize,
    /// Whether the score met the threshold
    pub passed: bool,
}

/// Result of submitting one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Advanced to the question at this index
    Next(usize),
    /// The quiz reached its terminal state
    Finished(QuizReport),
}

/// The quiz state machine.
///
/// Invariants:
/// - `current` is always in `[0, questions.len()]`
/// - `score <= current` while answering
/// - `report` is `Some` iff the engine is terminal, and is never recomputed
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    pass_ratio: f64,
    current: usize,
    score: usize,
    report: Option<QuizReport>,
}

impl QuizEngine {
    /// Create an engine over a fixed question list.
    ///
    /// `pass_ratio` is the fraction of correct answers required to pass; the
    /// threshold is `ceil(N * pass_ratio)`.
    pub fn new(questions: Vec<Question>, pass_ratio: f64) -> CardResult<Self> {
        if questions.is_empty() {
            return Err(CardError::EmptyQuiz);
        }
        if !(pass_ratio > 0.0 && pass_ratio <= 1.0) {
            return Err(CardError::InvalidPassRatio(pass_ratio));
        }
        for question in &questions {
            question.validate()?;
        }

        Ok(Self {
            questions,
            pass_ratio,
            current: 0,
            score: 0,
            report: None,
        })
    }

    /// Minimum correct answers required to pass `total` questions
    pub fn pass_threshold(total: usize, pass_ratio: f64) -> usize {
        (total as f64 * pass_ratio).ceil() as usize
    }

    /// The question currently awaiting an answer, or `None` when terminal
    pub fn current_question(&self) -> Option<&Question> {
        if self.report.is_some() {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// Zero-based index of the question awaiting an answer
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Correct answers accumulated so far
    pub fn score(&self) -> usize {
        self.score
    }

    /// Total number of questions
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Whether the engine has reached its terminal state
    pub fn is_finished(&self) -> bool {
        self.report.is_some()
    }

    /// The stored terminal report, if the quiz has completed.
    ///
    /// Reading this repeatedly returns the same stored value; the result is
    /// never recomputed after completion.
    pub fn report(&self) -> Option<QuizReport> {
        self.report
    }

    /// Submit the answer for the current question.
    ///
    /// Valid only while the engine is non-terminal; `selected` must index
    /// into the current question's options. The surrounding UI restricts
    /// choices to valid options, so either error indicates a caller bug.
    pub fn submit_answer(&mut self, selected: usize) -> CardResult<Progress> {
        if self.report.is_some() {
            return Err(CardError::QuizFinished);
        }

        let question = &self.questions[self.current];
        if selected >= question.options.len() {
            return Err(CardError::OptionOutOfRange {
                selected,
                available: question.options.len(),
            });
        }

        let correct = selected == question.answer;
        if correct {
            self.score += 1;
        }
        tracing::debug!(
            question = self.current,
            selected,
            correct,
            score = self.score,
            "Answer submitted"
        );

        self.current += 1;
        if self.current < self.questions.len() {
            return Ok(Progress::Next(self.current));
        }

        let total = self.questions.len();
        let threshold = Self::pass_threshold(total, self.pass_ratio);
        let report = QuizReport {
            score: self.score,
            total,
            threshold,
            passed: self.score >= threshold,
        };
        self.report = Some(report);
        tracing::info!(
            score = report.score,
            total = report.total,
            threshold = report.threshold,
            passed = report.passed,
            "Quiz completed"
        );
        Ok(Progress::Finished(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_questions() -> Vec<Question> {
        (0..4)
            .map(|i| Question::new(&format!("Q{}", i), &["right", "wrong", "wrong"], 0))
            .collect()
    }

    #[test]
    fn threshold_boundaries() {
        // N=5 at 0.70 needs 4; N=4 at 0.75 needs 3
        assert_eq!(QuizEngine::pass_threshold(5, 0.70), 4);
        assert_eq!(QuizEngine::pass_threshold(4, 0.75), 3);
        assert_eq!(QuizEngine::pass_threshold(4, 1.0), 4);
        assert_eq!(QuizEngine::pass_threshold(1, 0.70), 1);
    }

    #[test]
    fn three_of_four_passes() {
        let mut quiz = QuizEngine::new(four_questions(), 0.75).unwrap();
        assert_eq!(quiz.submit_answer(0).unwrap(), Progress::Next(1));
        assert_eq!(quiz.submit_answer(1).unwrap(), Progress::Next(2));
        assert_eq!(quiz.submit_answer(0).unwrap(), Progress::Next(3));
        match quiz.submit_answer(0).unwrap() {
            Progress::Finished(report) => {
                assert_eq!(report.score, 3);
                assert_eq!(report.threshold, 3);
                assert!(report.passed);
            }
            other => panic!("expected Finished, got {:?}", other),
        }
    }

    #[test]
    fn two_of_four_fails() {
        let mut quiz = QuizEngine::new(four_questions(), 0.75).unwrap();
        for answer in [1, 1, 0, 0] {
            quiz.submit_answer(answer).unwrap();
        }
        let report = quiz.report().unwrap();
        assert_eq!(report.score, 2);
        assert!(!report.passed);
    }

    #[test]
    fn terminal_is_absorbing() {
        let mut quiz = QuizEngine::new(four_questions(), 0.75).unwrap();
        for _ in 0..4 {
            quiz.submit_answer(0).unwrap();
        }
        let first = quiz.report().unwrap();
        assert!(matches!(quiz.submit_answer(0), Err(CardError::QuizFinished)));
        // Stored result is unchanged by the rejected call
        assert_eq!(quiz.report().unwrap(), first);
    }

    #[test]
    fn report_is_stable_across_reads() {
        let mut quiz = QuizEngine::new(four_questions(), 0.75).unwrap();
        for _ in 0..4 {
            quiz.submit_answer(0).unwrap();
        }
        let a = quiz.report().unwrap();
        let b = quiz.report().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_pick_is_rejected() {
        let mut quiz = QuizEngine::new(four_questions(), 0.75).unwrap();
        let err = quiz.submit_answer(9).unwrap_err();
        assert!(matches!(
            err,
            CardError::OptionOutOfRange {
                selected: 9,
                available: 3
            }
        ));
        // The rejected submission must not advance or score
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn score_never_exceeds_questions_seen() {
        let mut quiz = QuizEngine::new(four_questions(), 0.75).unwrap();
        for i in 0..4 {
            assert!(quiz.score() <= quiz.current_index());
            assert_eq!(quiz.current_index(), i);
            quiz.submit_answer(0).unwrap();
        }
    }

    #[test]
    fn empty_quiz_rejected() {
        assert!(matches!(
            QuizEngine::new(vec![], 0.7),
            Err(CardError::EmptyQuiz)
        ));
    }

    #[test]
    fn bad_pass_ratio_rejected() {
        let questions = four_questions();
        assert!(matches!(
            QuizEngine::new(questions.clone(), 0.0),
            Err(CardError::InvalidPassRatio(_))
        ));
        assert!(matches!(
            QuizEngine::new(questions, 1.5),
            Err(CardError::InvalidPassRatio(_))
        ));
    }

    #[test]
    fn bad_answer_index_rejected() {
        let questions = vec![Question::new("Q", &["a", "b"], 5)];
        assert!(matches!(
            QuizEngine::new(questions, 0.7),
            Err(CardError::InvalidAnswerIndex { answer: 5, .. })
        ));
    }

    #[test]
    fn current_question_none_after_finish() {
        let mut quiz = QuizEngine::new(four_questions(), 0.75).unwrap();
        assert!(quiz.current_question().is_some());
        for _ in 0..4 {
            quiz.submit_answer(0).unwrap();
        }
        assert!(quiz.current_question().is_none());
    }
}
