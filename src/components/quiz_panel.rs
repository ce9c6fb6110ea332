//! The memory quiz panel.
//!
//! Owns one `QuizEngine` for the lifetime of the quiz screen. Explicit
//! submit per question: picking an option only highlights it, and the
//! Submit button advances. No backtracking once advanced.

use dioxus::prelude::*;
use lovenote_core::{Progress, QuizEngine, QuizReport};

use crate::components::cards::GlassCard;
use crate::components::icons::{icon, Icon};
use crate::content::{questions, PASS_RATIO};

/// Quiz panel component.
///
/// `on_unlock` is called exactly once, and only when the completed quiz
/// passed; the engine's terminal state is absorbing so there is no second
/// completion.
#[component]
pub fn QuizPanel(on_unlock: EventHandler<QuizReport>) -> Element {
    let mut quiz: Signal<Option<QuizEngine>> = use_signal(|| {
        match QuizEngine::new(questions(), PASS_RATIO) {
            Ok(engine) => Some(engine),
            Err(e) => {
                tracing::error!(error = %e, "Failed to build quiz from card content");
                None
            }
        }
    });
    let mut pick: Signal<Option<usize>> = use_signal(|| None);

    let submit = move |_| {
        let Some(selected) = pick() else {
            return;
        };
        let mut guard = quiz.write();
        let Some(engine) = guard.as_mut() else {
            return;
        };
        match engine.submit_answer(selected) {
            Ok(Progress::Next(_)) => pick.set(None),
            Ok(Progress::Finished(report)) => {
                pick.set(None);
                if report.passed {
                    on_unlock.call(report);
                }
            }
            Err(e) => {
                // Choices are enumerated buttons, so this is a caller bug
                tracing::error!(error = %e, "Quiz submission rejected");
            }
        }
    };

    let Some(engine) = quiz() else {
        return rsx! {
            GlassCard {
                div { class: "body-text", "The quiz could not be loaded." }
            }
        };
    };

    let progress = if engine.is_finished() {
        "Complete".to_string()
    } else {
        format!("Q{} of {}", engine.current_index() + 1, engine.total())
    };

    rsx! {
        GlassCard {
            div { class: "quiz-head",
                div { class: "card-label", "Love Memory Quiz" }
                div { class: "quiz-progress", "{progress}" }
            }

            if let Some(question) = engine.current_question() {
                div {
                    div { class: "quiz-question", "{question.prompt}" }
                    div { class: "choice-list",
                        for (idx, option) in question.options.iter().enumerate() {
                            button {
                                key: "{engine.current_index()}-{idx}",
                                r#type: "button",
                                class: if pick() == Some(idx) { "choice-btn active" } else { "choice-btn" },
                                onclick: move |_| pick.set(Some(idx)),
                                "{option}"
                            }
                        }
                    }
                    div { class: "quiz-footer",
                        div { class: "quiz-score",
                            "Score: "
                            strong { "{engine.score()}" }
                        }
                        button {
                            r#type: "button",
                            class: "btn-primary",
                            onclick: submit,
                            {icon(Icon::BadgeCheck, 16)}
                            "Submit"
                        }
                    }
                }
            }

            if let Some(report) = engine.report() {
                div {
                    div { class: "quiz-question", "You did it \u{1f497}" }
                    div { class: "quiz-summary",
                        "Final score: "
                        strong { "{report.score}" }
                        " / {report.total}. "
                        if report.passed {
                            "You unlocked my letter below."
                        } else {
                            "Almost! Restart the card and try again to unlock the letter."
                        }
                    }
                }
            }
        }
    }
}
