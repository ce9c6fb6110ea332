//! Letter vault card: unlock status plus the gated "Open the letter" action.
//!
//! The disabled button is an affordance; the gate's `can_open_letter` check
//! is the enforcement, so the modal can never open while locked even if the
//! click somehow fires.

use dioxus::prelude::*;

use crate::components::cards::GlassCard;
use crate::components::icons::{icon, Icon};
use crate::context::{use_letter_open, use_unlock_gate, LetterOpen};

/// Vault status card shown beside the quiz
#[component]
pub fn LetterVault() -> Element {
    let gate = use_unlock_gate();
    let mut letter_open = use_letter_open();

    let unlocked = gate().can_open_letter();

    let open_letter = move |_| {
        if gate.peek().can_open_letter() {
            letter_open.set(LetterOpen(true));
        }
    };

    rsx! {
        GlassCard {
            div { class: "quiz-head",
                div { class: "card-label",
                    {icon(Icon::KeyRound, 16)}
                    "Letter vault"
                }
                if unlocked {
                    div { class: "vault-badge unlocked",
                        {icon(Icon::BadgeCheck, 16)}
                        "Unlocked"
                    }
                } else {
                    div { class: "vault-badge locked",
                        {icon(Icon::KeyRound, 16)}
                        "Locked"
                    }
                }
            }

            div { class: "body-text", style: "margin-top: 0.75rem;",
                if unlocked {
                    "Tap to open my Valentine letter."
                } else {
                    "Complete the quiz to unlock my letter."
                }
            }

            button {
                r#type: "button",
                class: "btn-primary vault-open-btn",
                disabled: !unlocked,
                onclick: open_letter,
                {icon(Icon::Quote, 16)}
                "Open the letter"
            }

            div { class: "inset-card", style: "margin-top: 1.25rem;",
                div { class: "card-label",
                    {icon(Icon::Globe, 16)}
                    "Next upgrade"
                }
                div { class: "body-text", style: "margin-top: 0.5rem;",
                    "Later we\u{2019}ll add Sabelo\u{2019}s voice note reading the \
                     letter \u{2014} a play button right here."
                }
            }
        }
    }
}
