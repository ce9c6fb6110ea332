//! Quiz page - the memory quiz, the letter vault, and the dedication song.
//!
//! This page wires the quiz outcome to the unlock gate: a passing report
//! unlocks the gate, and only the unlocking call fires the celebration
//! burst.

use dioxus::prelude::*;
use lovenote_core::{QuizReport, Screen};

use crate::components::icons::Icon;
use crate::components::{DedicationCard, LetterVault, QuizPanel, SectionTitle, Shell};
use crate::content;
use crate::context::{use_burst_trigger, use_unlock_gate, BurstTrigger};

#[component]
pub fn Quiz() -> Element {
    let mut gate = use_unlock_gate();
    let mut burst = use_burst_trigger();

    let on_unlock = move |report: QuizReport| {
        let newly_unlocked = gate.write().unlock();
        if newly_unlocked {
            tracing::info!(
                score = report.score,
                total = report.total,
                "Quiz passed, letter unlocked"
            );
            let next = burst.peek().0 + 1;
            burst.set(BurstTrigger(next));
        }
    };

    rsx! {
        Shell { current: Screen::Quiz,
            section { class: "fade-in-up",
                SectionTitle {
                    kicker: "CHAPTER TWO",
                    title: "Unlock my letter",
                    subtitle: "Answer the memory questions. Score 70%+ to unlock my \
                               Valentine letter.",
                    icon_kind: Icon::KeyRound,
                }

                div { class: "split-main",
                    div { class: "stack",
                        QuizPanel { on_unlock: on_unlock }
                        DedicationCard { dedication: content::dedication() }
                    }

                    LetterVault {}
                }
            }
        }
    }
}
