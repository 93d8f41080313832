//! Event dispatcher
//!
//! | Event             | Side effect                                      |
//! |-------------------|--------------------------------------------------|
//! | SubmitSuccess     | `username_created = true`, then close            |
//! | SubmitFailTaken   | toast                                            |
//! | SubmitFailInvalid | toast                                            |
//! | DeleteSuccess     | toast, then pop back (whatever the mode)         |
//! | NetworkFailure    | toast                                            |
//! | Skipped           | close                                            |
//!
//! "Close" depends on the mode: registration hands off to the pending next step
//! if there is one and ends the session, settings pops back.

use crate::i18n::Translations;
use crate::traits::UsernameEditHost;
use crate::types::{EventEnvelope, Mode, TerminalEvent};

/// What the session should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Stay on screen
    Continue,
    /// The screen was left; the session is over
    Closed,
    /// Already dispatched (sequence not newer than the last one)
    Duplicate,
}

#[derive(Debug)]
pub struct EventDispatcher {
    mode: Mode,
    last_seq: Option<u64>,
}

impl EventDispatcher {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            last_seq: None,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn dispatch(
        &mut self,
        envelope: EventEnvelope,
        host: &mut dyn UsernameEditHost,
        texts: &Translations,
    ) -> DispatchOutcome {
        if self.last_seq.is_some_and(|last| envelope.seq <= last) {
            log::debug!(
                "Skipping re-delivered event {:?} (seq {})",
                envelope.event,
                envelope.seq
            );
            return DispatchOutcome::Duplicate;
        }
        self.last_seq = Some(envelope.seq);
        log::debug!("Dispatching {:?} (seq {})", envelope.event, envelope.seq);

        match envelope.event {
            TerminalEvent::SubmitSuccess => {
                host.set_username_created(true);
                self.close(host)
            }
            TerminalEvent::SubmitFailTaken => {
                host.show_toast(texts.notices.username_taken);
                DispatchOutcome::Continue
            }
            TerminalEvent::SubmitFailInvalid => {
                host.show_toast(texts.notices.username_invalid);
                DispatchOutcome::Continue
            }
            TerminalEvent::DeleteSuccess => {
                // Pops back even in registration mode, where delete should be unreachable.
                host.show_toast(texts.notices.username_removed);
                host.pop_back_stack();
                DispatchOutcome::Closed
            }
            TerminalEvent::NetworkFailure => {
                host.show_toast(texts.notices.network_error);
                DispatchOutcome::Continue
            }
            TerminalEvent::Skipped => self.close(host),
        }
    }

    fn close(&mut self, host: &mut dyn UsernameEditHost) -> DispatchOutcome {
        match &mut self.mode {
            Mode::Registration { next_step } => {
                if let Some(next) = next_step.take() {
                    host.launch_next_step(next);
                }
                host.finish();
            }
            Mode::Settings => host.pop_back_stack(),
        }
        DispatchOutcome::Closed
    }
}
