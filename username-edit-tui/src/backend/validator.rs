//! 本地用户名校验（演示用）
//!
//! 只做客户端格式检查；可用性由 `view_model` 中的模拟检查决定。

use username_edit_core::types::{UsernameLimits, ValidationStatus};

/// 昵称 + 数字后缀校验器
#[derive(Debug, Clone, Copy)]
pub struct UsernameValidator {
    limits: UsernameLimits,
}

impl UsernameValidator {
    pub fn new(limits: UsernameLimits) -> Self {
        Self { limits }
    }

    /// 校验昵称；空昵称不算错误
    pub fn check_nickname(&self, nickname: &str) -> ValidationStatus {
        if nickname.is_empty() {
            return ValidationStatus::None;
        }

        let len = nickname.chars().count();
        if len < self.limits.min_nickname_length {
            return ValidationStatus::TooShort;
        }
        if len > self.limits.max_nickname_length {
            return ValidationStatus::TooLong;
        }
        if nickname.starts_with(|c: char| c.is_ascii_digit()) {
            return ValidationStatus::CannotStartWithNumber;
        }
        if !nickname
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return ValidationStatus::InvalidCharacters;
        }
        ValidationStatus::None
    }

    /// 校验数字后缀；空后缀不算错误
    pub fn check_discriminator(&self, discriminator: &str) -> ValidationStatus {
        if discriminator.is_empty() {
            return ValidationStatus::None;
        }
        if !discriminator.chars().all(|c| c.is_ascii_digit()) {
            return ValidationStatus::DiscriminatorHasInvalidCharacters;
        }

        let len = discriminator.len();
        if len > self.limits.max_discriminator_length {
            return ValidationStatus::DiscriminatorTooLong;
        }
        if len < self.limits.min_discriminator_length {
            return ValidationStatus::DiscriminatorTooShort;
        }
        // 00、000 ... 保留
        if discriminator.chars().all(|c| c == '0') {
            return ValidationStatus::DiscriminatorNotAvailable;
        }
        ValidationStatus::None
    }

    /// 两部分合并后的状态，昵称错误优先
    pub fn check(&self, nickname: &str, discriminator: &str) -> ValidationStatus {
        match self.check_nickname(nickname) {
            ValidationStatus::None => self.check_discriminator(discriminator),
            status => status,
        }
    }
}

/// 规范形式：`nickname.discriminator`
pub fn format_username(nickname: &str, discriminator: &str) -> String {
    format!("{nickname}.{discriminator}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> UsernameValidator {
        UsernameValidator::new(UsernameLimits::default())
    }

    #[test]
    fn test_nickname_rules() {
        let v = validator();
        assert_eq!(v.check_nickname(""), ValidationStatus::None);
        assert_eq!(v.check_nickname("an"), ValidationStatus::TooShort);
        assert_eq!(v.check_nickname(&"a".repeat(33)), ValidationStatus::TooLong);
        assert_eq!(
            v.check_nickname("1ann"),
            ValidationStatus::CannotStartWithNumber
        );
        assert_eq!(
            v.check_nickname("ann!"),
            ValidationStatus::InvalidCharacters
        );
        assert_eq!(v.check_nickname("ann_1"), ValidationStatus::None);
    }

    #[test]
    fn test_discriminator_rules() {
        let v = validator();
        assert_eq!(v.check_discriminator(""), ValidationStatus::None);
        assert_eq!(v.check_discriminator("1"), ValidationStatus::DiscriminatorTooShort);
        assert_eq!(
            v.check_discriminator("1234567890"),
            ValidationStatus::DiscriminatorTooLong
        );
        assert_eq!(
            v.check_discriminator("1a"),
            ValidationStatus::DiscriminatorHasInvalidCharacters
        );
        assert_eq!(
            v.check_discriminator("00"),
            ValidationStatus::DiscriminatorNotAvailable
        );
        assert_eq!(v.check_discriminator("12"), ValidationStatus::None);
    }

    #[test]
    fn test_nickname_error_wins() {
        assert_eq!(validator().check("an", "1"), ValidationStatus::TooShort);
    }

    #[test]
    fn test_custom_limits() {
        let v = UsernameValidator::new(UsernameLimits {
            min_nickname_length: 1,
            ..UsernameLimits::default()
        });
        assert_eq!(v.check_nickname("a"), ValidationStatus::None);
    }
}
