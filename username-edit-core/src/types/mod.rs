//! 类型定义模块

mod button;
mod entry;
mod event;
mod input;
mod status;
mod ui_state;
mod username;

pub use button::{ActionPhase, ButtonState, RegistrationButtonState, SettingsButtonState};
pub use entry::{EntryConfig, Mode, NextStep};
pub use event::{EventChannel, EventEnvelope, TerminalEvent};
pub use input::UsernameInputState;
pub use status::{UsernameLimits, ValidationStatus};
pub use ui_state::UiState;
pub use username::{UsernameResolution, UsernameState};
