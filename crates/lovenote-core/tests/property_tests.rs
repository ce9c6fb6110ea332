//! Property tests for the quiz engine.

use lovenote_core::{Progress, Question, QuizEngine};
use proptest::prelude::*;

const OPTIONS: usize = 4;

fn questions_with_answers(answers: &[usize]) -> Vec<Question> {
    answers
        .iter()
        .enumerate()
        .map(|(i, &answer)| {
            Question::new(&format!("Q{}", i), &["a", "b", "c", "d"][..OPTIONS], answer)
        })
        .collect()
}

proptest! {
    /// Final score always equals the number of submitted answers that match
    /// the correct index, for any valid answer sequence.
    #[test]
    fn score_counts_matching_answers(
        correct in prop::collection::vec(0..OPTIONS, 1..12),
        seed in prop::collection::vec(0..OPTIONS, 12),
    ) {
        let submitted = &seed[..correct.len()];
        let expected: usize = correct
            .iter()
            .zip(submitted)
            .filter(|(c, s)| c == s)
            .count();

        let mut quiz = QuizEngine::new(questions_with_answers(&correct), 0.70).unwrap();
        let mut finished = None;
        for &answer in submitted {
            if let Progress::Finished(report) = quiz.submit_answer(answer).unwrap() {
                finished = Some(report);
            }
        }

        let report = finished.expect("quiz must finish after N answers");
        prop_assert_eq!(report.score, expected);
        prop_assert_eq!(report.total, correct.len());
    }

    /// The pass result always agrees with the ceil-threshold rule.
    #[test]
    fn pass_matches_threshold_rule(
        correct in prop::collection::vec(0..OPTIONS, 1..12),
        seed in prop::collection::vec(0..OPTIONS, 12),
        ratio in 0.05f64..=1.0,
    ) {
        let submitted = &seed[..correct.len()];
        let mut quiz = QuizEngine::new(questions_with_answers(&correct), ratio).unwrap();
        let mut finished = None;
        for &answer in submitted {
            if let Progress::Finished(report) = quiz.submit_answer(answer).unwrap() {
                finished = Some(report);
            }
        }

        let report = finished.unwrap();
        let threshold = QuizEngine::pass_threshold(correct.len(), ratio);
        prop_assert_eq!(report.threshold, threshold);
        prop_assert_eq!(report.passed, report.score >= threshold);
    }

    /// Exactly one Finished progress is produced per engine instance.
    #[test]
    fn completion_fires_exactly_once(
        correct in prop::collection::vec(0..OPTIONS, 1..12),
        seed in prop::collection::vec(0..OPTIONS, 12),
    ) {
        let submitted = &seed[..correct.len()];
        let mut quiz = QuizEngine::new(questions_with_answers(&correct), 0.70).unwrap();
        let mut completions = 0;
        for &answer in submitted {
            if matches!(quiz.submit_answer(answer).unwrap(), Progress::Finished(_)) {
                completions += 1;
            }
        }
        prop_assert_eq!(completions, 1);
        prop_assert!(quiz.submit_answer(0).is_err());
    }
}
