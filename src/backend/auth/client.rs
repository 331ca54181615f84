//! Client for the hosted auth service.

use std::fmt;
use std::time::Duration;

use futures_util::future::BoxFuture;
use reqwest::Url;

use super::config::{AuthConfig, PUBLIC_KEY_VAR, URL_VAR};
use super::error::AuthError;
use super::models::{ApiErrorBody, Identity};

const USER_PATH: &str = "auth/v1/user";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Identity lookups the UI needs from an auth backend.
pub trait AuthProvider: Send + Sync {
    /// Fetches the identity bound to the current session.
    fn current_user(&self) -> BoxFuture<'_, Result<Identity, AuthError>>;
}

/// HTTP client for the auth service's user endpoint.
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    user_endpoint: Url,
    public_key: String,
    access_token: Option<String>,
}

impl AuthClient {
    /// Builds a client from the service url and public key in `config`.
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        let raw_url = config
            .service_url
            .as_deref()
            .ok_or(AuthError::MissingConfig { var: URL_VAR })?;
        let public_key = config
            .public_key
            .clone()
            .ok_or(AuthError::MissingConfig { var: PUBLIC_KEY_VAR })?;

        let user_endpoint = user_endpoint(raw_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(config.request_timeout))
            .user_agent(concat!("DreamAccount/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            user_endpoint,
            public_key,
            access_token: config.access_token.clone(),
        })
    }

    pub fn user_endpoint(&self) -> &Url {
        &self.user_endpoint
    }

    pub const fn has_session(&self) -> bool {
        self.access_token.is_some()
    }

    async fn fetch_user(&self) -> Result<Identity, AuthError> {
        let token = self
            .access_token
            .as_deref()
            .ok_or(AuthError::SessionMissing)?;

        log::debug!("Requesting current user from {}", self.user_endpoint);

        let response = self
            .http
            .get(self.user_endpoint.clone())
            .header("apikey", &self.public_key)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(ApiErrorBody::into_message)
                .unwrap_or_else(|| body.trim().to_string());
            return Err(AuthError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| AuthError::Decode(e.to_string()))
    }
}

impl AuthProvider for AuthClient {
    fn current_user(&self) -> BoxFuture<'_, Result<Identity, AuthError>> {
        Box::pin(self.fetch_user())
    }
}

impl fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthClient")
            .field("user_endpoint", &self.user_endpoint.as_str())
            .field("has_session", &self.has_session())
            .finish_non_exhaustive()
    }
}

fn user_endpoint(raw: &str) -> Result<Url, AuthError> {
    let mut base = Url::parse(raw).map_err(|e| AuthError::InvalidUrl(format!("{raw}: {e}")))?;

    if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
        return Err(AuthError::InvalidUrl(format!(
            "{raw}: expected an http(s) address"
        )));
    }

    // Keep any path prefix when joining.
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(USER_PATH)
        .map_err(|e| AuthError::InvalidUrl(format!("{raw}: {e}")))
}
