//! Routed pages.

mod home;
mod notes;
mod profile;

pub use home::Home;
pub use notes::Notes;
pub use profile::Profile;
