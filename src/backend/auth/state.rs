//! Sign-in state shared by the UI and the CLI.

use std::fmt;
use std::sync::Arc;

use super::client::{AuthClient, AuthProvider};
use super::config::AuthConfig;
use super::error::AuthError;
use super::models::Identity;

/// Auth client handle, current user and loading flag.
///
/// `user` is written at most once per state. `is_user_loading` drops to
/// `false` as soon as the lookup settles, whatever the outcome.
#[derive(Clone)]
pub struct AuthState {
    client: Option<Arc<dyn AuthProvider>>,
    user: Option<Identity>,
    is_user_loading: bool,
    last_error: Option<String>,
}

impl AuthState {
    /// Builds the client from `config`. A config that cannot produce a
    /// client yields a settled state with no client and no user.
    pub fn connect(config: &AuthConfig) -> Self {
        match AuthClient::new(config) {
            Ok(client) => {
                log::info!("Auth client ready for {}", client.user_endpoint());
                Self::with_provider(Arc::new(client))
            }
            Err(e) if e.is_config() => {
                log::warn!("Auth service not configured: {e}");
                Self::unavailable(&e)
            }
            Err(e) => {
                log::error!("Failed to create auth client: {e}");
                Self::unavailable(&e)
            }
        }
    }

    /// A pending state around any provider.
    pub fn with_provider(provider: Arc<dyn AuthProvider>) -> Self {
        Self {
            client: Some(provider),
            user: None,
            is_user_loading: true,
            last_error: None,
        }
    }

    /// A settled state with no client.
    pub fn unavailable(error: &AuthError) -> Self {
        Self {
            client: None,
            user: None,
            is_user_loading: false,
            last_error: Some(error.to_string()),
        }
    }

    pub fn client(&self) -> Option<Arc<dyn AuthProvider>> {
        self.client.clone()
    }

    pub const fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub const fn is_user_loading(&self) -> bool {
        self.is_user_loading
    }

    /// Last failure, kept for diagnostics only.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Records the outcome of the user lookup. Later outcomes are ignored.
    pub fn settle(&mut self, result: Result<Identity, AuthError>) {
        if !self.is_user_loading {
            log::debug!("Ignoring user lookup result, state already settled");
            return;
        }

        match result {
            Ok(identity) => {
                log::info!("Signed in as {}", identity.display_name());
                self.user = Some(identity);
                self.last_error = None;
            }
            Err(e) => {
                log::error!("Error fetching user: {e}");
                self.last_error = Some(e.to_string());
            }
        }
        self.is_user_loading = false;
    }

    /// Runs the pending lookup, if any, and settles the state.
    pub async fn resolve(&mut self) {
        if !self.is_user_loading {
            return;
        }
        let Some(client) = self.client.clone() else {
            self.is_user_loading = false;
            return;
        };
        let result = client.current_user().await;
        self.settle(result);
    }
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("has_client", &self.client.is_some())
            .field("user", &self.user)
            .field("is_user_loading", &self.is_user_loading)
            .field("last_error", &self.last_error)
            .finish()
    }
}
