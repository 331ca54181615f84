//! Utility modules shared by the UI.

/// Embedded stylesheets.
pub mod css;
/// Application routing.
pub mod route;
