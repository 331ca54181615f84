//! Back-navigation link.

use crate::backend::utils::route::Route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn BackButton(to: Route, #[props(into, default = "Back".to_string())] label: String) -> Element {
    rsx! {
        Link {
            class: "back-button",
            to: to,
            svg {
                class: "back-button-icon",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "m15 18-6-6 6-6" }
            }
            span { "{label}" }
        }
    }
}
