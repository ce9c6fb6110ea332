//! Sticky header with title block, screen navigation, and the burst button.
//!
//! Desktop: horizontal nav links. Narrow windows: links move to a scrollable
//! row under the header (CSS-gated).

use dioxus::prelude::*;
use lovenote_core::Screen;

use crate::app::Route;
use crate::components::icons::{icon, Icon};
use crate::context::{use_burst_trigger, BurstTrigger};

#[derive(Props, Clone, PartialEq)]
pub struct CardHeaderProps {
    /// The screen currently shown
    pub current: Screen,
}

/// Sticky card header
#[component]
pub fn CardHeader(props: CardHeaderProps) -> Element {
    let mut burst = use_burst_trigger();

    rsx! {
        header { class: "card-header",
            div { class: "header-inner",
                div { class: "header-title-block",
                    div { class: "header-icon-badge", {icon(Icon::Heart, 20)} }
                    div {
                        div { class: "app-title", "Sabelo \u{2192} Peggy" }
                        div { class: "app-subtitle", "Valentine\u{2019}s Day gift" }
                    }
                }

                nav { class: "nav-links",
                    for screen in Screen::all() {
                        Link {
                            to: Route::for_screen(screen),
                            class: if screen == props.current { "nav-link active" } else { "nav-link" },
                            "{screen.label()}"
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "burst-btn",
                    title: "Love burst",
                    onclick: move |_| {
                        let next = burst().0 + 1;
                        burst.set(BurstTrigger(next));
                    },
                    {icon(Icon::PartyPopper, 16)}
                    span { "Love burst" }
                }
            }
        }
    }
}

/// Scrollable nav row shown instead of the header links on narrow windows
#[component]
pub fn MobileNavRow(current: Screen) -> Element {
    rsx! {
        div { class: "mobile-nav",
            for screen in Screen::all() {
                Link {
                    to: Route::for_screen(screen),
                    class: if screen == current { "nav-link active" } else { "nav-link" },
                    "{screen.label()}"
                }
            }
        }
    }
}
