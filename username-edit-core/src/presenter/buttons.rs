//! Button state machines
//!
//! The view-model owns every transition; these renderers only map the current
//! state onto widgets. Registration and settings use disjoint state sets, and
//! the mode-checked conversion at the boundary is the only place a `Delete*`
//! state can be rejected.

use crate::error::EditResult;
use crate::surface::{ActionButton, Opacity, Surface};
use crate::types::{ActionPhase, ButtonState, Mode, RegistrationButtonState, SettingsButtonState};

/// Mode-selected button renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRenderer {
    /// Done + skip buttons, full-screen progress card
    Registration,
    /// Submit / delete buttons with inline spinners
    Settings,
}

impl ButtonRenderer {
    pub fn for_mode(mode: &Mode) -> Self {
        if mode.is_registration() {
            ButtonRenderer::Registration
        } else {
            ButtonRenderer::Settings
        }
    }

    pub fn present(self, surface: &mut Surface, state: ButtonState) -> EditResult<()> {
        match self {
            ButtonRenderer::Registration => {
                let state = RegistrationButtonState::try_from(state).map_err(|e| {
                    log::error!("{e}");
                    e
                })?;
                present_registration(surface, state);
            }
            ButtonRenderer::Settings => present_settings(surface, SettingsButtonState::from(state)),
        }
        Ok(())
    }
}

/// Inputs are editable unless an action is in flight.
fn set_inputs_enabled(surface: &mut Surface, phase: ActionPhase) {
    let enabled = phase != ActionPhase::Loading;
    surface.nickname.enabled = enabled;
    surface.discriminator.enabled = enabled;
}

fn present_registration(surface: &mut Surface, state: RegistrationButtonState) {
    let phase = state.phase();
    set_inputs_enabled(surface, phase);

    let done = &mut surface.done_button;
    done.visible = true;
    done.spinning = false;
    match phase {
        ActionPhase::Ready => {
            done.enabled = true;
            done.opacity = Opacity::Full;
            surface.progress_card_visible = false;
        }
        ActionPhase::Disabled => {
            done.enabled = false;
            done.opacity = Opacity::Dimmed;
            surface.progress_card_visible = false;
        }
        ActionPhase::Loading => {
            done.enabled = false;
            done.opacity = Opacity::Dimmed;
            surface.progress_card_visible = true;
        }
    }
}

fn present_settings(surface: &mut Surface, state: SettingsButtonState) {
    set_inputs_enabled(surface, state.phase());

    let (acting, other) = match state {
        SettingsButtonState::Submit(_) => (&mut surface.submit_button, &mut surface.delete_button),
        SettingsButtonState::Delete(_) => (&mut surface.delete_button, &mut surface.submit_button),
    };
    other.visible = false;
    other.spinning = false;
    show_phase(acting, state.phase());
}

fn show_phase(button: &mut ActionButton, phase: ActionPhase) {
    button.visible = true;
    match phase {
        ActionPhase::Ready => {
            button.spinning = false;
            button.enabled = true;
            button.opacity = Opacity::Full;
        }
        ActionPhase::Disabled => {
            button.spinning = false;
            button.enabled = false;
            button.opacity = Opacity::Dimmed;
        }
        ActionPhase::Loading => {
            button.spinning = true;
            button.enabled = false;
            button.opacity = Opacity::Full;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::UsernameEditError;

    fn settings() -> (ButtonRenderer, Surface) {
        (ButtonRenderer::Settings, Surface::new())
    }

    #[test]
    fn test_settings_submit_loading() {
        let (renderer, mut surface) = settings();
        renderer
            .present(&mut surface, ButtonState::SubmitLoading)
            .unwrap();

        assert!(!surface.delete_button.visible);
        assert!(surface.submit_button.visible);
        assert!(!surface.submit_button.enabled);
        assert!(surface.submit_button.spinning);
        assert!(!surface.nickname.enabled);
        assert!(!surface.discriminator.enabled);
    }

    #[test]
    fn test_settings_exactly_one_action_visible() {
        let (renderer, mut surface) = settings();
        for state in ButtonState::all() {
            renderer.present(&mut surface, *state).unwrap();
            assert!(
                surface.submit_button.visible ^ surface.delete_button.visible,
                "state {state:?}"
            );
            assert_eq!(surface.delete_button.visible, state.is_delete());
            assert_eq!(surface.nickname.enabled, !state.is_loading());
        }
    }

    #[test]
    fn test_settings_disabled_is_dimmed_and_editable() {
        let (renderer, mut surface) = settings();
        renderer
            .present(&mut surface, ButtonState::DeleteDisabled)
            .unwrap();

        assert!(surface.delete_button.visible);
        assert!(!surface.delete_button.enabled);
        assert!(!surface.delete_button.spinning);
        assert_eq!(surface.delete_button.opacity, Opacity::Dimmed);
        assert!(surface.nickname.enabled);
    }

    #[test]
    fn test_settings_loading_then_ready_stops_spinner() {
        let (renderer, mut surface) = settings();
        renderer
            .present(&mut surface, ButtonState::DeleteLoading)
            .unwrap();
        renderer.present(&mut surface, ButtonState::Delete).unwrap();

        assert!(surface.delete_button.is_actionable());
        assert_eq!(surface.delete_button.opacity, Opacity::Full);
        assert!(surface.discriminator.enabled);
    }

    #[test]
    fn test_registration_states() {
        let renderer = ButtonRenderer::Registration;
        let mut surface = Surface::new();

        renderer.present(&mut surface, ButtonState::Submit).unwrap();
        assert!(surface.done_button.is_actionable());
        assert_eq!(surface.done_button.opacity, Opacity::Full);
        assert!(!surface.progress_card_visible);

        renderer
            .present(&mut surface, ButtonState::SubmitDisabled)
            .unwrap();
        assert!(!surface.done_button.enabled);
        assert_eq!(surface.done_button.opacity, Opacity::Dimmed);
        assert!(!surface.progress_card_visible);
        assert!(surface.nickname.enabled);

        renderer
            .present(&mut surface, ButtonState::SubmitLoading)
            .unwrap();
        assert!(!surface.done_button.enabled);
        assert!(surface.progress_card_visible);
        assert!(!surface.nickname.enabled);
    }

    #[test]
    fn test_registration_rejects_delete_family() {
        let renderer = ButtonRenderer::Registration;
        let mut surface = Surface::new();
        let err = renderer
            .present(&mut surface, ButtonState::Delete)
            .unwrap_err();
        assert_eq!(
            err,
            UsernameEditError::DeleteUnavailableInRegistration(ButtonState::Delete)
        );
        assert!(err.is_fatal());
        // Nothing was rendered for the rejected state
        assert!(!surface.done_button.visible);
    }

    #[test]
    fn test_renderer_for_mode() {
        assert_eq!(
            ButtonRenderer::for_mode(&Mode::Settings),
            ButtonRenderer::Settings
        );
        assert_eq!(
            ButtonRenderer::for_mode(&Mode::Registration { next_step: None }),
            ButtonRenderer::Registration
        );
    }
}
