//! Summary presenter

use crate::surface::{Opacity, Surface};
use crate::types::{UsernameResolution, UsernameState};

/// Show the resolved username, or the placeholder when none is set.
///
/// While loading nothing changes, so the previous summary stays instead of
/// flashing the placeholder.
pub fn present_summary(surface: &mut Surface, state: &UsernameState, placeholder: &str) {
    match &state.resolution {
        UsernameResolution::Resolved(username) => {
            surface.summary.text.clone_from(username);
            surface.summary.opacity = Opacity::Full;
        }
        UsernameResolution::Unset => {
            surface.summary.text = placeholder.to_string();
            surface.summary.opacity = Opacity::Full;
        }
        UsernameResolution::Loading => {}
    }
}

/// Inline progress next to the fields, independent of the resolution variant.
pub fn present_progress(surface: &mut Surface, state: &UsernameState) {
    surface.suffix_progress_visible = state.in_progress;
}
