//! UI components and the app shell.

pub mod back_button;
pub mod input_modal;
pub mod layout;

pub use back_button::BackButton;
pub use input_modal::InputModal;
