//! Intro page - the hero view that opens the card.

use dioxus::prelude::*;
use lovenote_core::Screen;

use crate::app::Route;
use crate::components::icons::{icon, Icon};
use crate::components::{GlassCard, Pill, Shell, StatCard};

#[component]
pub fn Intro() -> Element {
    let navigator = use_navigator();

    rsx! {
        Shell { current: Screen::Intro,
            section { class: "fade-in-up",
                div { class: "split-main",
                    div {
                        GlassCard {
                            div { class: "pill-row",
                                Pill { icon_kind: Icon::Heart, label: "Happy Valentine\u{2019}s" }
                                Pill { icon_kind: Icon::Globe, label: "ZW \u{2192} Florida, USA" }
                                Pill { icon_kind: Icon::Coffee, label: "Tea + music" }
                            }

                            h1 { class: "hero-headline",
                                "Happy Valentine\u{2019}s Day,"
                                span { class: "gradient-text", "Peggy. \u{1f497}" }
                            }
                            div { class: "hero-lede",
                                "I made this just for you. Not a big speech \u{2014} a small \
                                 experience. Our story, told by me, for you. Tap through the \
                                 memories\u{2026} then take the quiz to unlock my letter."
                            }

                            div { class: "btn-row",
                                button {
                                    r#type: "button",
                                    class: "btn-primary",
                                    onclick: move |_| { navigator.push(Route::Story {}); },
                                    {icon(Icon::Sparkles, 16)}
                                    "Start our story"
                                    {icon(Icon::ArrowRight, 16)}
                                }
                                button {
                                    r#type: "button",
                                    class: "btn-ghost",
                                    onclick: move |_| { navigator.push(Route::Quiz {}); },
                                    {icon(Icon::KeyRound, 16)}
                                    "Jump to quiz"
                                }
                            }
                        }

                        div { class: "stat-row fade-in-up",
                            StatCard {
                                icon_kind: Icon::MapPin,
                                title: "Distance",
                                caption: "became destiny",
                            }
                            StatCard {
                                icon_kind: Icon::Timer,
                                title: "Timing",
                                caption: "perfectly placed",
                            }
                            StatCard {
                                icon_kind: Icon::Gift,
                                title: "A gift",
                                caption: "from Sabelo",
                            }
                        }
                    }

                    GlassCard { class: "fade-in-up",
                        div { class: "card-label",
                            {icon(Icon::Star, 16)}
                            "What you\u{2019}ll find inside"
                        }
                        div { class: "stack", style: "margin-top: 0.75rem;",
                            div { class: "inset-card",
                                div { class: "stat-title", "Cinematic Valentine UI" }
                                div { class: "body-text", "Pink aurora, floating hearts, glass cards." }
                            }
                            div { class: "inset-card",
                                div { class: "stat-title", "Our story (first-person)" }
                                div { class: "body-text", "Told by me \u{2014} not a narrator." }
                            }
                            div { class: "inset-card",
                                div { class: "stat-title", "A quiz unlock" }
                                div { class: "body-text", "Answer 70%+ to open my letter." }
                            }
                            div { class: "inset-card",
                                div { class: "stat-title", "A perfect finale" }
                                div { class: "body-text", "A clean ending screen you can replay." }
                            }
                        }
                        div { class: "muted-note", "Made with love by Sabelo." }
                    }
                }
            }
        }
    }
}
