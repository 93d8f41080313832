//! Unified error type definition

use thiserror::Error;

use crate::types::ButtonState;

/// Core layer error type
///
/// Recoverable failures (validation, submission, network) never show up here: they
/// are rendered inline or as toasts and terminate at the controller boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameEditError {
    /// A `Delete*` button state reached the registration renderer.
    /// Registration has no delete capability, so this is a contract violation.
    #[error("Delete functionality is not available during registration (button state: {0:?})")]
    DeleteUnavailableInRegistration(ButtonState),

    /// Unknown language code (config / command line)
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),
}

impl UsernameEditError {
    /// Whether the error is a programming-contract violation that must abort the session.
    ///
    /// Level `error` should be used when returning `true` and level `warn` when returning `false`.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::DeleteUnavailableInRegistration(_) => true,
            Self::UnknownLanguage(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type EditResult<T> = std::result::Result<T, UsernameEditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violation_is_fatal() {
        let err = UsernameEditError::DeleteUnavailableInRegistration(ButtonState::Delete);
        assert!(err.is_fatal());
        assert!(err.to_string().contains("not available during registration"));
    }

    #[test]
    fn test_unknown_language_is_recoverable() {
        assert!(!UsernameEditError::UnknownLanguage("xx".to_string()).is_fatal());
    }
}
