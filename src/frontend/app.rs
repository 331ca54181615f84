//! Root component.

use crate::backend::auth::AuthConfig;
use crate::backend::utils::route::Route;
use crate::frontend::services::use_auth;
use dioxus::prelude::*;
use dioxus_router::Router;

#[component]
pub fn AppRoot() -> Element {
    let config = use_context::<AuthConfig>();
    let auth = use_auth(config);
    use_context_provider(|| auth);

    rsx! { Router::<Route> {} }
}
