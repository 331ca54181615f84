//! Headless `whoami` command.

use anyhow::{Result, bail};

use crate::backend::auth::{AuthConfig, AuthState, Identity};

/// Resolves the signed-in user once and prints it.
pub async fn whoami(config: &AuthConfig) -> Result<()> {
    let mut state = AuthState::connect(config);
    state.resolve().await;

    match state.user() {
        Some(identity) => {
            println!("{}", describe(identity));
            Ok(())
        }
        None => bail!(
            "not signed in: {}",
            state.last_error().unwrap_or("no user returned")
        ),
    }
}

fn describe(identity: &Identity) -> String {
    let mut lines = vec![
        format!("name:  {}", identity.display_name()),
        format!("id:    {}", identity.id),
    ];
    if let Some(email) = &identity.email {
        lines.push(format!("email: {email}"));
    }
    if let Some(role) = &identity.role {
        lines.push(format!("role:  {role}"));
    }
    if let Some(at) = identity.last_sign_in_at {
        lines.push(format!("last sign-in: {}", at.format("%Y-%m-%d %H:%M UTC")));
    }
    lines.join("\n")
}
