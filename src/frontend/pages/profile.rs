//! Profile page for the signed-in user.

use crate::backend::auth::Identity;
use crate::backend::utils::route::Route;
use crate::frontend::components::BackButton;
use crate::frontend::services::use_auth_context;
use dioxus::prelude::*;

#[component]
pub fn Profile() -> Element {
    let auth = use_auth_context();

    let body = if auth.is_user_loading() {
        rsx! {
            div { class: "card", "Loading profile..." }
        }
    } else if let Some(user) = auth.user() {
        let rows = profile_rows(&user);
        rsx! {
            div {
                class: "card",
                for (label, value) in rows {
                    div {
                        class: "field-row",
                        span { class: "field-label", "{label}" }
                        span { "{value}" }
                    }
                }
            }
        }
    } else if auth.client().is_none() {
        rsx! {
            div { class: "card", "Sign-in is unavailable: the auth service is not configured." }
        }
    } else {
        rsx! {
            div { class: "card", "You are not signed in." }
        }
    };

    rsx! {
        BackButton { to: Route::Home {} }
        h1 { class: "page-title", "Profile" }
        {body}
    }
}

fn profile_rows(user: &Identity) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Name", user.display_name()), ("ID", user.id.clone())];
    if let Some(email) = user.email.as_ref().filter(|e| !e.is_empty()) {
        rows.push(("Email", email.clone()));
    }
    if let Some(phone) = user.phone.as_ref().filter(|p| !p.is_empty()) {
        rows.push(("Phone", phone.clone()));
    }
    if let Some(role) = &user.role {
        rows.push(("Role", role.clone()));
    }
    if let Some(at) = user.created_at {
        rows.push(("Member since", at.format("%Y-%m-%d").to_string()));
    }
    if let Some(at) = user.last_sign_in_at {
        rows.push(("Last sign-in", at.format("%Y-%m-%d %H:%M UTC").to_string()));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_skip_blank_fields() {
        let user: Identity = serde_json::from_str(
            r#"{ "id": "u-1", "email": "", "phone": "", "created_at": "2025-03-01T10:00:00Z" }"#,
        )
        .unwrap();

        let labels: Vec<_> = profile_rows(&user).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Name", "ID", "Member since"]);
    }
}
