//! 校验状态与长度限制

use serde::{Deserialize, Serialize};

/// 用户名校验状态
///
/// 任一时刻只有一个生效值；`None` 表示没有可见错误。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    #[default]
    None,
    TooShort,
    TooLong,
    InvalidCharacters,
    CannotStartWithNumber,
    InvalidGeneric,
    Taken,
    DiscriminatorHasInvalidCharacters,
    DiscriminatorNotAvailable,
    DiscriminatorTooLong,
    DiscriminatorTooShort,
}

impl ValidationStatus {
    /// 获取所有校验状态
    pub fn all() -> &'static [ValidationStatus] {
        &[
            ValidationStatus::None,
            ValidationStatus::TooShort,
            ValidationStatus::TooLong,
            ValidationStatus::InvalidCharacters,
            ValidationStatus::CannotStartWithNumber,
            ValidationStatus::InvalidGeneric,
            ValidationStatus::Taken,
            ValidationStatus::DiscriminatorHasInvalidCharacters,
            ValidationStatus::DiscriminatorNotAvailable,
            ValidationStatus::DiscriminatorTooLong,
            ValidationStatus::DiscriminatorTooShort,
        ]
    }

    /// 是否为错误状态
    pub fn is_error(self) -> bool {
        self != ValidationStatus::None
    }
}

/// 用户名长度限制
///
/// 代入错误提示模板中的数值边界。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UsernameLimits {
    pub min_nickname_length: usize,
    pub max_nickname_length: usize,
    pub min_discriminator_length: usize,
    pub max_discriminator_length: usize,
}

impl Default for UsernameLimits {
    fn default() -> Self {
        Self {
            min_nickname_length: 3,
            max_nickname_length: 32,
            min_discriminator_length: 2,
            max_discriminator_length: 9,
        }
    }
}
