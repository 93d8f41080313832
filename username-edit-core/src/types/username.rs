//! 用户名解析状态

use serde::{Deserialize, Serialize};

/// view-model 当前对完整用户名的最佳认知
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsernameResolution {
    /// 加载中（保留上一次的显示内容）
    #[default]
    Loading,
    /// 已解析出用户名（如 `ann.12`）
    Resolved(String),
    /// 未设置用户名
    Unset,
}

/// 用户名状态
///
/// `in_progress` 与解析结果相互独立：已解析的值也可能正在重新检查。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameState {
    pub resolution: UsernameResolution,
    pub in_progress: bool,
}

impl UsernameState {
    pub fn loading() -> Self {
        Self {
            resolution: UsernameResolution::Loading,
            in_progress: false,
        }
    }

    pub fn resolved(username: impl Into<String>) -> Self {
        Self {
            resolution: UsernameResolution::Resolved(username.into()),
            in_progress: false,
        }
    }

    pub fn unset() -> Self {
        Self {
            resolution: UsernameResolution::Unset,
            in_progress: false,
        }
    }

    /// 设置进行中标志
    #[must_use]
    pub fn with_progress(mut self, in_progress: bool) -> Self {
        self.in_progress = in_progress;
        self
    }

    /// 已解析的用户名（若有）
    pub fn username(&self) -> Option<&str> {
        match &self.resolution {
            UsernameResolution::Resolved(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.resolution, UsernameResolution::Loading)
    }
}
