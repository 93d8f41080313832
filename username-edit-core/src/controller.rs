//! Username edit controller
//!
//! Wires the view-model's three streams to the presenters and the user's
//! gestures to view-model commands. Driven from a single UI loop:
//! [`start`](UsernameEditController::start) subscribes and renders the current
//! state, [`poll`](UsernameEditController::poll) drains whatever arrived since,
//! [`stop`](UsernameEditController::stop) (or drop) releases the subscriptions.
//!
//! The only durable state lives in the view-model; the controller keeps the
//! widget surface, the per-field suppression flags and the last dispatched
//! event sequence.

use crate::error::EditResult;
use crate::i18n::t;
use crate::presenter::{
    error_message, present_progress, present_status, present_summary, ButtonRenderer,
    DispatchOutcome, EventDispatcher, TextSyncBridge,
};
use crate::subscription::{Emission, SubscriptionGroup};
use crate::surface::{Dialog, FieldEdit, FieldId, LayoutAnimation, Surface, TextChange};
use crate::traits::{UsernameEditHost, UsernameEditViewModel};
use crate::types::{
    EntryConfig, EventEnvelope, Mode, NextStep, UiState, UsernameInputState, UsernameLimits,
};

pub struct UsernameEditController<V: UsernameEditViewModel> {
    view_model: V,
    limits: UsernameLimits,
    surface: Surface,
    text_sync: TextSyncBridge,
    buttons: ButtonRenderer,
    dispatcher: EventDispatcher,
    subscriptions: Option<SubscriptionGroup>,
    closed: bool,
}

impl<V: UsernameEditViewModel> UsernameEditController<V> {
    /// Create a controller; the mode is fixed here for the whole session.
    pub fn new(
        view_model: V,
        entry: EntryConfig,
        next_step: Option<NextStep>,
        limits: UsernameLimits,
    ) -> Self {
        let mode = Mode::from_entry(entry, next_step);
        let mut surface = Surface::new();
        apply_mode_chrome(&mut surface, &mode);

        Self {
            view_model,
            limits,
            surface,
            text_sync: TextSyncBridge::new(),
            buttons: ButtonRenderer::for_mode(&mode),
            dispatcher: EventDispatcher::new(mode),
            subscriptions: None,
            closed: false,
        }
    }

    pub fn view_model(&self) -> &V {
        &self.view_model
    }

    pub fn mode(&self) -> &Mode {
        self.dispatcher.mode()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Whether the streams are currently subscribed
    pub fn is_active(&self) -> bool {
        self.subscriptions.is_some()
    }

    /// Whether a terminal event has left the screen
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    // ========== Lifecycle ==========

    /// Subscribe to the view-model and render its current state.
    pub fn start(&mut self) -> EditResult<()> {
        if self.closed {
            log::warn!("Session already closed, not re-subscribing");
            return Ok(());
        }
        if self.subscriptions.is_some() {
            return Ok(());
        }

        let mut group = SubscriptionGroup::subscribe(&self.view_model);
        let replayed = group.replay();
        self.subscriptions = Some(group);
        log::debug!("Subscribed to view-model streams");

        for emission in replayed {
            match emission {
                Emission::UiState(state) => self.render_ui_state(&state)?,
                Emission::Input(state) => self.render_input_state(&state),
                Emission::Event(_) => {}
            }
        }
        Ok(())
    }

    /// Release every subscription; undelivered events are discarded.
    pub fn stop(&mut self) {
        if self.subscriptions.take().is_some() {
            log::debug!("Released view-model subscriptions");
        }
    }

    /// Render everything emitted since the last poll, in emission order.
    ///
    /// A terminal event that leaves the screen ends the session: the rest of the
    /// batch is dropped and the subscriptions are released.
    pub fn poll(&mut self, host: &mut dyn UsernameEditHost) -> EditResult<()> {
        let Some(group) = self.subscriptions.as_mut() else {
            return Ok(());
        };

        for emission in group.drain() {
            match emission {
                Emission::UiState(state) => self.render_ui_state(&state)?,
                Emission::Input(state) => self.render_input_state(&state),
                Emission::Event(envelope) => {
                    if self.handle_event(envelope, host) == DispatchOutcome::Closed {
                        self.closed = true;
                        self.stop();
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    // ========== Rendering ==========

    pub fn render_ui_state(&mut self, state: &UiState) -> EditResult<()> {
        // Buttons first: a rejected state must not leave a half-rendered surface
        self.buttons.present(&mut self.surface, state.button_state)?;
        let texts = t();
        present_progress(&mut self.surface, &state.username_state);
        present_summary(
            &mut self.surface,
            &state.username_state,
            texts.screen.choose_your_username,
        );
        let message = error_message(state.username_status, &self.limits, texts);
        present_status(&mut self.surface, message);
        Ok(())
    }

    pub fn render_input_state(&mut self, state: &UsernameInputState) {
        self.text_sync.present(&mut self.surface, state);
    }

    pub fn handle_event(
        &mut self,
        envelope: EventEnvelope,
        host: &mut dyn UsernameEditHost,
    ) -> DispatchOutcome {
        self.dispatcher.dispatch(envelope, host, t())
    }

    // ========== Gestures ==========

    /// Apply a keystroke to a field; accepted text changes reach the view-model once.
    pub fn edit_field(&mut self, id: FieldId, edit: FieldEdit) {
        if !self.surface.field(id).enabled {
            log::debug!("Ignoring edit on disabled field {id:?}");
            return;
        }
        self.surface.focus = id;

        let Some(change) = self.surface.field_mut(id).apply(edit) else {
            return;
        };
        if let Some(change) = self.text_sync.route(change) {
            self.forward(change);
        }
    }

    fn forward(&self, change: TextChange) {
        match change.field {
            FieldId::Nickname => self.view_model.on_nickname_updated(&change.text),
            FieldId::Discriminator => self.view_model.on_discriminator_updated(&change.text),
        }
    }

    pub fn submit_clicked(&mut self) {
        if self.surface.submit_button.is_actionable() {
            self.view_model.on_username_submitted();
        } else {
            log::debug!("Submit button is not actionable");
        }
    }

    pub fn done_clicked(&mut self) {
        if self.surface.done_button.is_actionable() {
            self.view_model.on_username_submitted();
        } else {
            log::debug!("Done button is not actionable");
        }
    }

    pub fn delete_clicked(&mut self) {
        if self.surface.delete_button.is_actionable() {
            self.view_model.on_username_deleted();
        } else {
            log::debug!("Delete button is not actionable");
        }
    }

    pub fn skip_clicked(&mut self) {
        if self.surface.skip_button.is_actionable() {
            self.view_model.on_username_skipped();
        } else {
            log::debug!("Skip button is not actionable");
        }
    }

    /// Keyboard "done" on the discriminator field submits the username.
    pub fn editor_done(&mut self) {
        if self.surface.discriminator.enabled {
            self.view_model.on_username_submitted();
        }
    }

    /// Toolbar back navigation; only present in settings.
    pub fn navigate_back(&mut self, host: &mut dyn UsernameEditHost) -> bool {
        if !self.surface.toolbar.back_navigation {
            return false;
        }
        host.pop_back_stack();
        self.closed = true;
        self.stop();
        true
    }

    pub fn focus_field(&mut self, id: FieldId) {
        self.surface.focus = id;
    }

    pub fn toggle_focus(&mut self) {
        self.surface.focus = self.surface.focus.toggle();
    }

    pub fn show_learn_more(&mut self) {
        self.surface.dialog = Some(Dialog::LearnMore);
    }

    pub fn dismiss_dialog(&mut self) {
        self.surface.dialog = None;
    }

    /// Layout animation queued by the last render batch, if any
    pub fn take_layout_animation(&mut self) -> Option<LayoutAnimation> {
        self.surface.layout.take_pending()
    }
}

fn apply_mode_chrome(surface: &mut Surface, mode: &Mode) {
    let texts = t();
    match mode {
        Mode::Registration { .. } => {
            surface.toolbar.title = texts.screen.title_add.to_string();
            surface.toolbar.back_navigation = false;
            surface.skip_button.visible = true;
            surface.skip_button.enabled = true;
            surface.done_button.visible = true;
        }
        Mode::Settings => {
            surface.toolbar.title = texts.screen.title_edit.to_string();
            surface.toolbar.back_navigation = true;
            surface.submit_button.visible = true;
        }
    }
    surface.focus = FieldId::Nickname;
}
