//! Finale page - the closing view, replayable from the top.

use dioxus::prelude::*;
use lovenote_core::Screen;

use crate::app::Route;
use crate::components::icons::{icon, Icon};
use crate::components::{GlassCard, Pill, SectionTitle, Shell};
use crate::context::{use_burst_trigger, BurstTrigger};

#[component]
pub fn Finale() -> Element {
    let navigator = use_navigator();
    let mut burst = use_burst_trigger();

    let celebrate = move |_| {
        let next = burst.peek().0 + 1;
        burst.set(BurstTrigger(next));
    };

    rsx! {
        Shell { current: Screen::Finale,
            section { class: "fade-in-up",
                SectionTitle {
                    kicker: "FINAL CHAPTER",
                    title: "Forever starts now",
                    subtitle: "A clean, cinematic ending slide \u{2014} perfect to show \
                               on a laptop or TV.",
                    icon_kind: Icon::Heart,
                }

                div { class: "split-wide",
                    GlassCard { class: "finale-card",
                        div { class: "finale-glow left", "aria-hidden": "true" }
                        div { class: "finale-glow right", "aria-hidden": "true" }

                        div { class: "finale-content",
                            div { class: "pill-row",
                                Pill { icon_kind: Icon::Heart, label: "Peggy" }
                                Pill { icon_kind: Icon::Heart, label: "Sabelo" }
                                Pill { icon_kind: Icon::Sparkles, label: "Valentine\u{2019}s" }
                            }

                            div { class: "hero-headline",
                                "Here\u{2019}s to the chapter"
                                span { class: "gradient-text",
                                    "we waited our whole lives to read."
                                }
                            }
                            div { class: "hero-lede",
                                "Some stories are short in time but infinite in meaning. \
                                 And you, Peggy, are my favorite part of every day."
                            }

                            div { class: "finale-grid",
                                div { class: "inset-card",
                                    div { class: "card-label",
                                        {icon(Icon::Coffee, 16)}
                                        "Vibe"
                                    }
                                    div { class: "body-text", style: "margin-top: 0.5rem;",
                                        "Good cups. Great talks. Real laughter."
                                    }
                                }
                                div { class: "inset-card",
                                    div { class: "card-label",
                                        {icon(Icon::Music, 16)}
                                        "Soundtrack"
                                    }
                                    div { class: "body-text", style: "margin-top: 0.5rem;",
                                        "Jazz \u{2192} Gospel \u{2192} Afrobeat \u{2192} \
                                         and a little magic."
                                    }
                                }
                            }

                            div { class: "btn-row",
                                button {
                                    r#type: "button",
                                    class: "btn-primary",
                                    onclick: celebrate,
                                    {icon(Icon::PartyPopper, 16)}
                                    "Celebrate us"
                                }
                                button {
                                    r#type: "button",
                                    class: "btn-ghost",
                                    onclick: move |_| { navigator.push(Route::Intro {}); },
                                    {icon(Icon::Star, 16)}
                                    "Replay"
                                }
                            }

                            div { class: "finale-signoff", "\u{2014} with love, always. \u{1f497}" }
                        }
                    }

                    GlassCard {
                        div { class: "card-label",
                            {icon(Icon::Film, 16)}
                            "Easy upgrades"
                        }
                        ul { class: "stack", style: "margin-top: 0.75rem; list-style: none;",
                            li { class: "inset-card",
                                div { class: "stat-title", "Add photos" }
                                div { class: "body-text", "Swap the \u{201c}Us\u{201d} cards for a carousel." }
                            }
                            li { class: "inset-card",
                                div { class: "stat-title", "Add a Florida moment" }
                                div { class: "body-text", "A glowing ZW \u{2192} Florida line animation." }
                            }
                            li { class: "inset-card",
                                div { class: "stat-title", "Add the voice note" }
                                div { class: "body-text", "Sabelo reading the letter, embedded right here." }
                            }
                        }

                        div { class: "inset-card", style: "margin-top: 1.25rem;",
                            div { class: "card-label",
                                {icon(Icon::Gift, 16)}
                                "Gift note"
                            }
                            div { class: "body-text", style: "margin-top: 0.5rem;",
                                "Peggy, I hope this makes you smile \u{2014} and reminds \
                                 you I\u{2019}m always choosing you."
                            }
                        }
                    }
                }
            }
        }
    }
}
