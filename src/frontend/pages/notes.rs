//! Quick note editing through the input modal.

use crate::backend::utils::route::Route;
use crate::frontend::components::{BackButton, InputModal};
use dioxus::prelude::*;

#[component]
pub fn Notes() -> Element {
    let mut note = use_signal(String::new);
    let mut editing = use_signal(|| false);

    let is_empty = note.read().trim().is_empty();

    rsx! {
        BackButton { to: Route::Home {} }
        h1 { class: "page-title", "Notes" }

        div {
            class: "card",
            div {
                class: if is_empty { "note-text empty" } else { "note-text" },
                if is_empty {
                    "Nothing here yet."
                } else {
                    "{note}"
                }
            }
            button {
                class: "primary-btn",
                onclick: move |_| editing.set(true),
                "Edit"
            }
        }

        InputModal {
            is_open: editing(),
            value: note(),
            title: "Edit note",
            placeholder: "Write something...",
            on_close: move |_| editing.set(false),
            on_save: move |text: String| {
                log::debug!("Saving note ({} chars)", text.chars().count());
                note.set(text);
            },
        }
    }
}
