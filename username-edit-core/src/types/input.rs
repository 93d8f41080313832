//! 输入框状态

use serde::{Deserialize, Serialize};

/// 用户名输入状态（昵称 + 数字后缀）
///
/// 由 view-model 在每次接受编辑后整体发出，新值原子地替换旧值。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameInputState {
    /// 昵称部分
    pub nickname: String,
    /// 数字后缀（discriminator）
    pub discriminator: String,
}

impl UsernameInputState {
    pub fn new(nickname: impl Into<String>, discriminator: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            discriminator: discriminator.into(),
        }
    }

    /// 两个字段是否都为空
    pub fn is_empty(&self) -> bool {
        self.nickname.is_empty() && self.discriminator.is_empty()
    }
}
