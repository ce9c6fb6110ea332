//! Story page - the timeline of how we met, plus the two persona cards.

use dioxus::prelude::*;
use lovenote_core::Screen;

use crate::app::Route;
use crate::components::icons::{icon, Icon};
use crate::components::{GlassCard, PersonaCard, SectionTitle, Shell, TimelineItem};
use crate::content;

#[component]
pub fn Story() -> Element {
    let navigator = use_navigator();
    let moments = use_hook(content::story);
    let personas = use_hook(content::personas);

    rsx! {
        Shell { current: Screen::Story,
            section { class: "fade-in-up",
                SectionTitle {
                    kicker: "CHAPTER ONE",
                    title: "How we met",
                    subtitle: "No coincidence. Just God\u{2019}s hand and good Wi-Fi.",
                    icon_kind: Icon::Sparkles,
                }

                div { class: "split-main",
                    GlassCard {
                        div { class: "stack",
                            for (i, moment) in moments.iter().enumerate() {
                                TimelineItem {
                                    key: "{moment.title}",
                                    index: i + 1,
                                    moment: moment.clone(),
                                }
                            }
                        }

                        div { class: "btn-row",
                            button {
                                r#type: "button",
                                class: "btn-primary",
                                onclick: move |_| { navigator.push(Route::Quiz {}); },
                                {icon(Icon::KeyRound, 16)}
                                "Take the quiz"
                            }
                            button {
                                r#type: "button",
                                class: "btn-ghost",
                                onclick: move |_| { navigator.push(Route::Finale {}); },
                                {icon(Icon::Heart, 16)}
                                "Skip to finale"
                            }
                        }
                    }

                    div {
                        SectionTitle {
                            kicker: "THE DUO",
                            title: "Us",
                            subtitle: "Tiny snapshots of you and me.",
                            icon_kind: Icon::Heart,
                        }

                        div { class: "stack",
                            for persona in personas.iter() {
                                PersonaCard { key: "{persona.name}", persona: persona.clone() }
                            }

                            GlassCard {
                                div { class: "card-label",
                                    {icon(Icon::Coffee, 16)}
                                    "Our vibe"
                                }
                                div { class: "body-text", style: "margin-top: 0.5rem;",
                                    "In one line: "
                                    strong {
                                        "\u{201c}A good cup, a great playlist, and a \
                                         conversation that never feels forced.\u{201d}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
