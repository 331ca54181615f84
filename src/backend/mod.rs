//! Backend of the application.

pub mod auth;
pub mod cli;
pub mod utils;
