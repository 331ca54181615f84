//! Auth service access: configuration, client and sign-in state.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod state;

pub use client::{AuthClient, AuthProvider};
pub use config::AuthConfig;
pub use error::AuthError;
pub use models::Identity;
pub use state::AuthState;
