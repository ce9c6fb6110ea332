//! Heart burst: short-lived celebration particles.
//!
//! Watches the shared burst trigger; each increment samples a fresh set of
//! pieces and schedules a clear after a fixed duration. A newer trigger
//! supersedes the pending clear, so rapid re-triggers extend the show
//! instead of cutting it off.

use std::time::Duration;

use dioxus::prelude::*;
use lovenote_core::effects::{self, BurstPiece, BURST_CLEAR_MS, BURST_PIECES};

use crate::components::icons::{icon, Icon};
use crate::context::use_burst_trigger;

/// The burst overlay, rendered once at the root
#[component]
pub fn HeartBurst() -> Element {
    let trigger = use_burst_trigger();
    let mut pieces: Signal<Vec<BurstPiece>> = use_signal(Vec::new);

    use_effect(move || {
        let fire = trigger().0;
        if fire == 0 {
            return;
        }
        pieces.set(effects::heart_burst(BURST_PIECES, &mut rand::rng()));

        spawn(async move {
            tokio::time::sleep(Duration::from_millis(BURST_CLEAR_MS)).await;
            // Only clear if no newer trigger fired while we slept
            if trigger.peek().0 == fire {
                pieces.set(Vec::new());
            }
        });
    });

    let current = pieces();
    if current.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "burst-layer", "aria-hidden": "true",
            for (i, piece) in current.iter().enumerate() {
                div {
                    key: "{trigger().0}-{i}",
                    class: "burst-piece",
                    style: "--x: {piece.drift_x}px; --y: {piece.drift_y}px; \
                            --r: {piece.rotation}deg; --s: {piece.scale}; --d: {piece.duration}s;",
                    {icon(Icon::Heart, 20)}
                }
            }
        }
    }
}
