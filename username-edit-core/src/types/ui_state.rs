//! 页面 UI 状态

use serde::{Deserialize, Serialize};

use super::{ButtonState, UsernameState, ValidationStatus};

/// view-model 发出的整页 UI 状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub username_state: UsernameState,
    pub username_status: ValidationStatus,
    pub button_state: ButtonState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            username_state: UsernameState::loading(),
            username_status: ValidationStatus::None,
            button_state: ButtonState::SubmitDisabled,
        }
    }
}
