//! The letter modal.
//!
//! Overlay + glass card; closes on overlay click or the Close button. The
//! letter body is a compile-time markdown literal rendered to HTML.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

use crate::components::icons::{icon, Icon};
use crate::content::letter;
use crate::context::{use_letter_open, LetterOpen};

/// The letter behind the unlock gate, rendered at the root
#[component]
pub fn LetterModal() -> Element {
    let mut letter_open = use_letter_open();

    // Convert the letter markdown to HTML once
    let letter_html = use_memo(move || {
        let options = Options::empty();
        let parser = Parser::new_ext(letter(), options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    });

    let close = move |_| letter_open.set(LetterOpen(false));

    if !letter_open().0 {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: close,

            div {
                class: "letter-modal fade-in-up",
                onclick: move |e| e.stop_propagation(),

                div { class: "letter-head",
                    div { class: "letter-title",
                        {icon(Icon::Quote, 16)}
                        "Sabelo\u{2019}s Valentine Letter"
                    }
                    button {
                        r#type: "button",
                        class: "letter-close-btn",
                        onclick: close,
                        "Close"
                    }
                }

                div { class: "letter-body",
                    div { class: "letter-paper",
                        div {
                            class: "letter-markdown",
                            dangerous_inner_html: "{letter_html()}",
                        }
                    }
                }
            }
        }
    }
}
