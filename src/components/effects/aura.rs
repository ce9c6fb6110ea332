//! Aurora background: layered radial gradient blobs over the plum void.
//!
//! The top glow follows the cursor a few pixels for a parallax feel; the
//! blobs and vignette stay put.

use dioxus::prelude::*;

use crate::context::{reduce_motion, use_parallax};

/// Background layer with two aurora blobs, a soft vignette, and the
/// cursor-tracking hero glow
#[component]
pub fn AuraBackground() -> Element {
    let parallax = use_parallax();

    let glow_style = if reduce_motion() {
        String::new()
    } else {
        let offset = parallax();
        format!(
            "transform: translate3d({:.2}px, {:.2}px, 0);",
            offset.shift_x(),
            offset.shift_y()
        )
    };

    rsx! {
        div { class: "aura-layer", "aria-hidden": "true",
            div { class: "aura-blob top-left" }
            div { class: "aura-blob bottom-right" }
            div { class: "aura-vignette" }
        }
        div { class: "top-glow pulse-soft", "aria-hidden": "true", style: "{glow_style}" }
    }
}
