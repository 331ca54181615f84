//! Frontend module for the `DreamAccount` application.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
