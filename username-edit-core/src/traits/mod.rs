//! Collaborator abstraction trait definition

mod host;
mod view_model;

pub use host::{UsernameEditHost, USERNAME_CREATED_KEY};
pub use view_model::UsernameEditViewModel;
