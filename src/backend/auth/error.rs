//! Errors raised while talking to the auth service.

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing auth configuration: {var}")]
    MissingConfig { var: &'static str },
    #[error("invalid auth service url: {0}")]
    InvalidUrl(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("auth session missing")]
    SessionMissing,
    #[error("auth service error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("unexpected user payload: {0}")]
    Decode(String),
}

impl AuthError {
    /// Whether the error comes from configuration rather than the service.
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::MissingConfig { .. } | Self::InvalidUrl(_))
    }
}
