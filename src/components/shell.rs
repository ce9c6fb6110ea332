//! Shared page chrome: background layers, header, burst overlay, letter
//! modal, and footer around each screen's content.

use dioxus::desktop::use_window;
use dioxus::prelude::*;
use lovenote_core::effects::ParallaxOffset;
use lovenote_core::Screen;

use crate::components::effects::{AuraBackground, FloatingHearts, HeartBurst, Starfield};
use crate::components::header::{CardHeader, MobileNavRow};
use crate::components::letter_modal::LetterModal;
use crate::context::{reduce_motion, use_parallax};

#[derive(Props, Clone, PartialEq)]
pub struct ShellProps {
    /// The screen being shown, for nav highlighting
    pub current: Screen,
    pub children: Element,
}

/// Wraps a page in the card chrome.
///
/// Overlays (burst, letter modal) render here so they sit above whichever
/// screen is active.
#[component]
pub fn Shell(props: ShellProps) -> Element {
    let root_class = if reduce_motion() {
        "card-root reduced-motion"
    } else {
        "card-root"
    };

    let window = use_window();
    let mut parallax = use_parallax();
    let on_mouse_move = move |evt: MouseEvent| {
        if reduce_motion() {
            return;
        }
        let point = evt.data().client_coordinates();
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        parallax.set(ParallaxOffset::from_cursor(
            point.x as f32,
            point.y as f32,
            size.width as f32,
            size.height as f32,
        ));
    };

    rsx! {
        div { class: "{root_class}", onmousemove: on_mouse_move,
            AuraBackground {}
            Starfield {}
            FloatingHearts {}

            HeartBurst {}
            LetterModal {}

            CardHeader { current: props.current }

            main { class: "card-main",
                MobileNavRow { current: props.current }
                {props.children}
            }

            footer { class: "card-footer",
                div { class: "footer-inner",
                    "Valentine\u{2019}s Gift \u{2014} Sabelo \u{2192} Peggy. \
                     Story, quiz, and letter live in the card content."
                }
            }
        }
    }
}
