//! Floating hearts that drift up from the bottom edge.

use dioxus::prelude::*;
use lovenote_core::effects::{self, HEART_COUNT};

use crate::components::icons::{icon, Icon};
use crate::context::reduce_motion;

/// Fixed set of hearts sampled once at mount.
///
/// Suppressed entirely under reduced motion - a stationary heart at the
/// bottom edge would just look broken.
#[component]
pub fn FloatingHearts() -> Element {
    if reduce_motion() {
        return rsx! {};
    }

    let hearts = use_hook(|| effects::floating_hearts(HEART_COUNT, &mut rand::rng()));

    rsx! {
        div { class: "hearts-layer", "aria-hidden": "true",
            for (i, heart) in hearts.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "floating-heart float-up",
                    style: "left: {heart.x}%; opacity: {heart.opacity}; \
                            transform: scale({heart.scale}); --d: {heart.duration}s; \
                            --o: {heart.opacity}; animation-delay: {heart.delay}s;",
                    {icon(Icon::Heart, 24)}
                }
            }
        }
    }
}
