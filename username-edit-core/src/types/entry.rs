//! 入口配置与会话模式

use serde::{Deserialize, Serialize};

/// 宿主传入的入口配置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntryConfig {
    /// 是否处于注册流程
    pub is_in_registration: bool,
}

/// 注册完成后的下一步（来自宿主的启动参数，对本组件不透明）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStep {
    pub label: String,
}

impl NextStep {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// 会话模式，构造时确定，整个会话期间不变
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// 注册流程：关闭时交给下一步（若有），否则直接结束
    Registration { next_step: Option<NextStep> },
    /// 设置页面：关闭时返回上一页
    Settings,
}

impl Mode {
    pub fn from_entry(entry: EntryConfig, next_step: Option<NextStep>) -> Self {
        if entry.is_in_registration {
            Mode::Registration { next_step }
        } else {
            Mode::Settings
        }
    }

    pub fn is_registration(&self) -> bool {
        matches!(self, Mode::Registration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_mode_drops_next_step() {
        let mode = Mode::from_entry(EntryConfig::default(), Some(NextStep::new("main")));
        assert_eq!(mode, Mode::Settings);
    }

    #[test]
    fn test_registration_mode_keeps_next_step() {
        let entry = EntryConfig {
            is_in_registration: true,
        };
        let mode = Mode::from_entry(entry, Some(NextStep::new("main")));
        assert!(mode.is_registration());
        assert_eq!(
            mode,
            Mode::Registration {
                next_step: Some(NextStep::new("main"))
            }
        );
    }
}
