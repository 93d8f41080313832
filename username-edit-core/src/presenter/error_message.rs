//! Error taxonomy mapper

use crate::i18n::{fill, Translations};
use crate::surface::{Accent, Surface};
use crate::types::{UsernameLimits, ValidationStatus};

/// Map a validation status to its inline message; `None` for `ValidationStatus::None`.
pub fn error_message(
    status: ValidationStatus,
    limits: &UsernameLimits,
    texts: &Translations,
) -> Option<String> {
    let v = &texts.validation;
    let message = match status {
        ValidationStatus::None => return None,
        ValidationStatus::TooShort | ValidationStatus::TooLong => fill(
            v.length_between,
            &[
                ("min", &limits.min_nickname_length),
                ("max", &limits.max_nickname_length),
            ],
        ),
        ValidationStatus::InvalidCharacters => v.invalid_characters.to_string(),
        ValidationStatus::CannotStartWithNumber => v.cannot_start_with_number.to_string(),
        ValidationStatus::InvalidGeneric => v.invalid_generic.to_string(),
        ValidationStatus::Taken => v.taken.to_string(),
        ValidationStatus::DiscriminatorHasInvalidCharacters
        | ValidationStatus::DiscriminatorNotAvailable => v.discriminator_not_available.to_string(),
        ValidationStatus::DiscriminatorTooLong => fill(
            v.discriminator_max_digits,
            &[("count", &limits.max_discriminator_length)],
        ),
        ValidationStatus::DiscriminatorTooShort => fill(
            v.discriminator_min_digits,
            &[("count", &limits.min_discriminator_length)],
        ),
    };
    Some(message)
}

/// Apply the inline error and the matching theme as one batch.
///
/// A message selects the error accent for both fields' carets and the hint,
/// no message selects the primary accent. The swap happens with layout
/// animation suspended; only the error line's size change is animated afterwards.
pub fn present_status(surface: &mut Surface, message: Option<String>) {
    let accent = if message.is_some() {
        Accent::Error
    } else {
        Accent::Primary
    };

    let mut batch = surface.batch();
    batch.hint_accent = accent;
    batch.nickname.accent = accent;
    batch.discriminator.accent = accent;
    batch.error.visible = message.is_some();
    batch.error.text = message;
}
