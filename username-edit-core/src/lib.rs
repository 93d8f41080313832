//! Username Edit Core Library
//!
//! Presentation controller for the "choose a username" screen. A username is a
//! nickname plus a numeric discriminator (`ann.12`). The controller sits between
//! an external view-model (three state streams plus commands) and a widget
//! surface, and owns no durable state of its own:
//! - Error taxonomy mapping (validation status -> inline message)
//! - Text sync between the two input fields and authoritative state, without echo
//! - Registration / settings button state machines
//! - Summary rendering
//! - Terminal event dispatch (toasts, navigation, result hand-off)
//!
//! The crate is platform-independent: the view-model and the hosting shell are
//! reached through traits, and the surface is plain data any renderer can draw.

pub mod controller;
pub mod error;
pub mod i18n;
pub mod presenter;
pub mod subscription;
pub mod surface;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use controller::UsernameEditController;
pub use error::{EditResult, UsernameEditError};
pub use subscription::SubscriptionGroup;
pub use surface::{FieldId, Surface};
pub use traits::{UsernameEditHost, UsernameEditViewModel};
