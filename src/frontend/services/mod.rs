//! Frontend services: sign-in state and editing helpers.

pub mod auth;
pub mod edit_buffer;

pub use auth::{AuthContext, use_auth, use_auth_context};
pub use edit_buffer::EditBuffer;
