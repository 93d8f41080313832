//! Subscription group
//!
//! Owns the receivers of the three view-model streams for one session.
//! Dropping the group releases every subscription at once, whichever way the
//! session ends; anything not yet drained is discarded with it.

use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::{broadcast, watch};

use crate::traits::UsernameEditViewModel;
use crate::types::{EventEnvelope, UiState, UsernameInputState};

/// One item drained from the streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    UiState(UiState),
    Input(UsernameInputState),
    Event(EventEnvelope),
}

pub struct SubscriptionGroup {
    ui_state: watch::Receiver<UiState>,
    input: watch::Receiver<UsernameInputState>,
    events: broadcast::Receiver<EventEnvelope>,
    ui_state_closed: bool,
    input_closed: bool,
    events_closed: bool,
}

impl SubscriptionGroup {
    pub fn subscribe(view_model: &dyn UsernameEditViewModel) -> Self {
        Self {
            ui_state: view_model.ui_state(),
            input: view_model.username_input_state(),
            events: view_model.events(),
            ui_state_closed: false,
            input_closed: false,
            events_closed: false,
        }
    }

    /// Current values of the replayed-latest streams, marked as seen.
    pub fn replay(&mut self) -> Vec<Emission> {
        vec![
            Emission::UiState(self.ui_state.borrow_and_update().clone()),
            Emission::Input(self.input.borrow_and_update().clone()),
        ]
    }

    /// Everything emitted since the last drain, without blocking.
    ///
    /// State streams keep only their latest value; events come out in emission order.
    pub fn drain(&mut self) -> Vec<Emission> {
        let mut emissions = Vec::new();

        if let Some(state) = latest(&mut self.ui_state, &mut self.ui_state_closed, "ui state") {
            emissions.push(Emission::UiState(state));
        }
        if let Some(state) = latest(&mut self.input, &mut self.input_closed, "input state") {
            emissions.push(Emission::Input(state));
        }

        while !self.events_closed {
            match self.events.try_recv() {
                Ok(envelope) => emissions.push(Emission::Event(envelope)),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Lagged(skipped)) => {
                    log::warn!("Event stream lagged, {skipped} event(s) dropped");
                }
                Err(TryRecvError::Closed) => {
                    log::warn!("Event stream closed by the view-model");
                    self.events_closed = true;
                }
            }
        }

        emissions
    }
}

fn latest<T: Clone>(rx: &mut watch::Receiver<T>, closed: &mut bool, name: &str) -> Option<T> {
    if *closed {
        return None;
    }
    match rx.has_changed() {
        Ok(true) => Some(rx.borrow_and_update().clone()),
        Ok(false) => None,
        Err(_) => {
            log::warn!("The {name} stream was closed by the view-model");
            *closed = true;
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::MockViewModel;
    use crate::types::{ButtonState, TerminalEvent};

    #[test]
    fn test_replay_returns_current_values() {
        let vm = MockViewModel::new();
        vm.input
            .send_replace(UsernameInputState::new("ann", "12"));
        let mut group = SubscriptionGroup::subscribe(&vm);

        let replayed = group.replay();
        assert_eq!(
            replayed[1],
            Emission::Input(UsernameInputState::new("ann", "12"))
        );
        // Already seen: nothing new to drain
        assert!(group.drain().is_empty());
    }

    #[test]
    fn test_drain_keeps_latest_state_and_every_event() {
        let vm = MockViewModel::new();
        let mut group = SubscriptionGroup::subscribe(&vm);
        group.replay();

        vm.ui_state.send_modify(|s| s.button_state = ButtonState::Submit);
        vm.ui_state
            .send_modify(|s| s.button_state = ButtonState::SubmitLoading);
        vm.events.emit(TerminalEvent::SubmitFailTaken);
        vm.events.emit(TerminalEvent::NetworkFailure);

        let drained = group.drain();
        assert_eq!(drained.len(), 3);
        let Emission::UiState(state) = &drained[0] else {
            panic!("expected ui state first, got {:?}", drained[0]);
        };
        assert_eq!(state.button_state, ButtonState::SubmitLoading);
        assert!(matches!(
            drained[1],
            Emission::Event(EventEnvelope {
                event: TerminalEvent::SubmitFailTaken,
                ..
            })
        ));
        assert!(matches!(
            drained[2],
            Emission::Event(EventEnvelope {
                event: TerminalEvent::NetworkFailure,
                ..
            })
        ));
    }

    #[test]
    fn test_closed_streams_are_reported_once() {
        let vm = MockViewModel::new();
        let mut group = SubscriptionGroup::subscribe(&vm);
        group.replay();
        drop(vm);

        assert!(group.drain().is_empty());
        assert!(group.ui_state_closed);
        assert!(group.input_closed);
        assert!(group.events_closed);
        assert!(group.drain().is_empty());
    }
}
