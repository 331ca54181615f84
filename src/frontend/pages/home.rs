//! Landing page.

use crate::backend::utils::route::Route;
use crate::frontend::services::use_auth_context;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn Home() -> Element {
    let auth = use_auth_context();

    let greeting = match auth.display_name() {
        Some(name) => format!("Welcome back, {name}!"),
        None if auth.is_user_loading() => "Welcome!".to_string(),
        None => "Welcome! You are browsing without an account.".to_string(),
    };

    rsx! {
        h1 { class: "page-title", "{greeting}" }

        Link {
            class: "card card-link",
            to: Route::Profile {},
            h3 { "Profile" }
            p { "See the account you are signed in with." }
        }

        Link {
            class: "card card-link",
            to: Route::Notes {},
            h3 { "Notes" }
            p { "Keep a quick note while you play." }
        }
    }
}
