//! 按钮状态
//!
//! view-model 只发出一个扁平的 `ButtonState`；渲染前先按模式转换为两个互不相交的封闭集合：
//! - 注册流程：`RegistrationButtonState`（仅 Submit 家族）
//! - 设置页面：`SettingsButtonState`（Submit / Delete 两个家族）

use serde::{Deserialize, Serialize};

use crate::error::UsernameEditError;

/// view-model 发出的按钮状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ButtonState {
    Submit,
    SubmitDisabled,
    SubmitLoading,
    Delete,
    DeleteDisabled,
    DeleteLoading,
}

/// 按钮所处阶段（与家族无关）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionPhase {
    /// 可点击
    Ready,
    /// 不可点击，半透明
    Disabled,
    /// 提交中
    Loading,
}

impl ButtonState {
    /// 获取所有按钮状态
    pub fn all() -> &'static [ButtonState] {
        &[
            ButtonState::Submit,
            ButtonState::SubmitDisabled,
            ButtonState::SubmitLoading,
            ButtonState::Delete,
            ButtonState::DeleteDisabled,
            ButtonState::DeleteLoading,
        ]
    }

    pub fn phase(self) -> ActionPhase {
        match self {
            ButtonState::Submit | ButtonState::Delete => ActionPhase::Ready,
            ButtonState::SubmitDisabled | ButtonState::DeleteDisabled => ActionPhase::Disabled,
            ButtonState::SubmitLoading | ButtonState::DeleteLoading => ActionPhase::Loading,
        }
    }

    /// 是否属于 Delete 家族
    pub fn is_delete(self) -> bool {
        matches!(
            self,
            ButtonState::Delete | ButtonState::DeleteDisabled | ButtonState::DeleteLoading
        )
    }

    pub fn is_loading(self) -> bool {
        self.phase() == ActionPhase::Loading
    }
}

/// 注册流程可用的按钮状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationButtonState {
    Submit,
    SubmitDisabled,
    SubmitLoading,
}

impl RegistrationButtonState {
    pub fn phase(self) -> ActionPhase {
        match self {
            RegistrationButtonState::Submit => ActionPhase::Ready,
            RegistrationButtonState::SubmitDisabled => ActionPhase::Disabled,
            RegistrationButtonState::SubmitLoading => ActionPhase::Loading,
        }
    }
}

impl TryFrom<ButtonState> for RegistrationButtonState {
    type Error = UsernameEditError;

    fn try_from(state: ButtonState) -> Result<Self, Self::Error> {
        match state {
            ButtonState::Submit => Ok(RegistrationButtonState::Submit),
            ButtonState::SubmitDisabled => Ok(RegistrationButtonState::SubmitDisabled),
            ButtonState::SubmitLoading => Ok(RegistrationButtonState::SubmitLoading),
            ButtonState::Delete | ButtonState::DeleteDisabled | ButtonState::DeleteLoading => {
                Err(UsernameEditError::DeleteUnavailableInRegistration(state))
            }
        }
    }
}

/// 设置页面可用的按钮状态：提交与删除互斥，同一时刻只显示一个
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsButtonState {
    Submit(ActionPhase),
    Delete(ActionPhase),
}

impl SettingsButtonState {
    pub fn phase(self) -> ActionPhase {
        match self {
            SettingsButtonState::Submit(phase) | SettingsButtonState::Delete(phase) => phase,
        }
    }
}

impl From<ButtonState> for SettingsButtonState {
    fn from(state: ButtonState) -> Self {
        if state.is_delete() {
            SettingsButtonState::Delete(state.phase())
        } else {
            SettingsButtonState::Submit(state.phase())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_accepts_submit_family_only() {
        for state in ButtonState::all() {
            let converted = RegistrationButtonState::try_from(*state);
            if state.is_delete() {
                assert_eq!(
                    converted,
                    Err(UsernameEditError::DeleteUnavailableInRegistration(*state))
                );
            } else {
                assert_eq!(converted.unwrap().phase(), state.phase());
            }
        }
    }

    #[test]
    fn test_settings_keeps_family_and_phase() {
        assert_eq!(
            SettingsButtonState::from(ButtonState::SubmitLoading),
            SettingsButtonState::Submit(ActionPhase::Loading)
        );
        assert_eq!(
            SettingsButtonState::from(ButtonState::DeleteDisabled),
            SettingsButtonState::Delete(ActionPhase::Disabled)
        );
        assert_eq!(
            SettingsButtonState::from(ButtonState::Delete).phase(),
            ActionPhase::Ready
        );
    }

    #[test]
    fn test_button_state_serde_names() {
        let json = serde_json::to_string(&ButtonState::DeleteLoading).unwrap();
        assert_eq!(json, "\"DELETE_LOADING\"");
    }
}
