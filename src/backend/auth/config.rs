//! Auth service configuration.
//!
//! Values come from the environment once at startup and are handed to the
//! UI through the launch context. Nothing here validates them: a missing or
//! malformed value only fails when a client is built from it.

use std::time::Duration;

pub const URL_VAR: &str = "DREAM_AUTH_URL";
pub const PUBLIC_KEY_VAR: &str = "DREAM_AUTH_PUBLIC_KEY";
pub const ACCESS_TOKEN_VAR: &str = "DREAM_AUTH_ACCESS_TOKEN";
pub const TIMEOUT_VAR: &str = "DREAM_AUTH_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub service_url: Option<String>,
    pub public_key: Option<String>,
    pub access_token: Option<String>,
    pub request_timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            service_url: None,
            public_key: None,
            access_token: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AuthConfig {
    /// Reads `DREAM_AUTH_URL`, `DREAM_AUTH_PUBLIC_KEY`,
    /// `DREAM_AUTH_ACCESS_TOKEN` and `DREAM_AUTH_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let request_timeout = read(TIMEOUT_VAR)
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS), Duration::from_secs);

        Self {
            service_url: read(URL_VAR),
            public_key: read(PUBLIC_KEY_VAR),
            access_token: read(ACCESS_TOKEN_VAR),
            request_timeout,
        }
    }
}

#[cfg(test)]
impl AuthConfig {
    /// Sets the service endpoint and public key.
    pub(crate) fn with_service(mut self, url: impl Into<String>, public_key: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self.public_key = Some(public_key.into());
        self
    }

    /// Sets the session token sent with user requests.
    pub(crate) fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}
