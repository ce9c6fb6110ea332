//! Dedication song card with an embedded third-party player.
//!
//! The embed is an opaque external resource; if it fails to load the
//! webview shows its own placeholder and the card carries on.

use dioxus::prelude::*;
use lovenote_core::Dedication;

use crate::components::cards::GlassCard;
use crate::components::icons::{icon, Icon};

#[component]
pub fn DedicationCard(dedication: Dedication) -> Element {
    rsx! {
        GlassCard {
            div { class: "card-label",
                {icon(Icon::Music, 16)}
                "A dedication song for you \u{1f497}"
            }
            div { class: "video-note",
                "Take your time. Listen closely \u{2014} it\u{2019}s not just a song. \
                 It\u{2019}s how I say \u{201c}I love you\u{201d} without interrupting \
                 the music."
            }

            div { class: "video-frame",
                iframe {
                    src: "{dedication.embed_url}",
                    title: "Dedication song",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                    allowfullscreen: true,
                }
            }

            div { class: "video-links",
                a {
                    class: "btn-primary external-link",
                    href: "{dedication.open_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {icon(Icon::Play, 16)}
                    "Open on YouTube"
                    {icon(Icon::ArrowRight, 16)}
                }
                div { class: "video-caption",
                    "(Placeholder for now \u{2014} we\u{2019}ll swap in the real \
                     dedication link later.)"
                }
            }
        }
    }
}
