use crate::frontend::components::layout::Shell;
use crate::frontend::pages::{Home, Notes, Profile};

use dioxus::prelude::*;
use dioxus_router::Routable;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/profile")]
    Profile {},
    #[route("/notes")]
    Notes {},
}
