//! App shell around every page.

use crate::backend::utils::css::ResourceLoader;
use crate::backend::utils::route::Route;
use crate::frontend::services::use_auth_context;
use dioxus::prelude::*;
use dioxus_router::components::Outlet;

#[component]
pub fn Shell() -> Element {
    let auth = use_auth_context();

    let (user_class, user_label) = if auth.is_user_loading() {
        ("shell-user loading", "Signing in...".to_string())
    } else {
        match auth.display_name() {
            Some(name) => ("shell-user", name),
            None => ("shell-user", "Signed out".to_string()),
        }
    };

    rsx! {
        style {
            dangerous_inner_html: ResourceLoader::shell_css()
        }

        div {
            class: "shell",
            header {
                class: "shell-header",
                span { class: "shell-title", "Dream Account" }
                span { class: "{user_class}", "{user_label}" }
            }
            main {
                class: "shell-content",
                Outlet::<Route> {}
            }
        }
    }
}
