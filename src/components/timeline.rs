//! Story timeline items and persona cards.

use dioxus::prelude::*;
use lovenote_core::{Persona, StoryMoment};

use crate::components::cards::{GlassCard, Pill};
use crate::components::icons::Icon;

/// One numbered entry on the story timeline
#[component]
pub fn TimelineItem(index: usize, moment: StoryMoment) -> Element {
    rsx! {
        div { class: "timeline-item",
            div { class: "timeline-index", "{index}" }
            div { class: "timeline-card",
                div { class: "timeline-head",
                    div { class: "timeline-title", "{moment.title}" }
                    div { class: "timeline-meta", "{moment.meta}" }
                }
                div { class: "timeline-text", "{moment.text}" }
            }
        }
    }
}

/// Snapshot card for one of the two of us
#[component]
pub fn PersonaCard(persona: Persona) -> Element {
    rsx! {
        GlassCard {
            div { class: "persona-head",
                div {
                    div { class: "persona-name", "{persona.name}" }
                    div { class: "persona-role", "{persona.role}" }
                }
                div { class: "persona-avatar", "aria-hidden": "true",
                    "{persona.initials()}"
                }
            }
            div { class: "pill-row", style: "margin-top: 0.75rem;",
                for chip in persona.chips.iter() {
                    Pill {
                        icon_kind: Icon::from(chip.icon),
                        label: chip.label.clone(),
                    }
                }
            }
            div { class: "persona-text", "{persona.text}" }
        }
    }
}
