//! Twinkling starfield layer.

use dioxus::prelude::*;
use lovenote_core::effects::{self, STAR_COUNT};

use crate::context::reduce_motion;

/// Fixed set of stars sampled once at mount; twinkle is pure CSS
#[component]
pub fn Starfield() -> Element {
    let stars = use_hook(|| effects::starfield(STAR_COUNT, &mut rand::rng()));
    let star_class = if reduce_motion() { "star" } else { "star twinkle" };

    rsx! {
        div { class: "starfield", "aria-hidden": "true",
            for (i, star) in stars.iter().enumerate() {
                span {
                    key: "{i}",
                    class: "{star_class}",
                    style: "left: {star.x}%; top: {star.y}%; width: {star.size}px; \
                            height: {star.size}px; opacity: {star.opacity}; --d: {star.duration}s;",
                }
            }
        }
    }
}
