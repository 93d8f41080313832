//! 测试辅助模块
//!
//! 提供 mock view-model 与记录型宿主。

use std::cell::RefCell;

use tokio::sync::{broadcast, watch};

use crate::traits::{UsernameEditHost, UsernameEditViewModel};
use crate::types::{EventChannel, EventEnvelope, NextStep, UiState, UsernameInputState};

// ===== RecordingHost =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    UsernameCreated(bool),
    Toast(String),
    PopBack,
    LaunchNextStep(NextStep),
    Finish,
}

pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }
}

impl UsernameEditHost for RecordingHost {
    fn set_username_created(&mut self, created: bool) {
        self.calls.push(HostCall::UsernameCreated(created));
    }

    fn show_toast(&mut self, message: &str) {
        self.calls.push(HostCall::Toast(message.to_string()));
    }

    fn pop_back_stack(&mut self) {
        self.calls.push(HostCall::PopBack);
    }

    fn launch_next_step(&mut self, next_step: NextStep) {
        self.calls.push(HostCall::LaunchNextStep(next_step));
    }

    fn finish(&mut self) {
        self.calls.push(HostCall::Finish);
    }
}

// ===== MockViewModel =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VmCall {
    Nickname(String),
    Discriminator(String),
    Submitted,
    Deleted,
    Skipped,
}

pub struct MockViewModel {
    pub ui_state: watch::Sender<UiState>,
    pub input: watch::Sender<UsernameInputState>,
    pub events: EventChannel,
    pub calls: RefCell<Vec<VmCall>>,
}

impl MockViewModel {
    pub fn new() -> Self {
        Self {
            ui_state: watch::Sender::new(UiState::default()),
            input: watch::Sender::new(UsernameInputState::default()),
            events: EventChannel::default(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<VmCall> {
        self.calls.borrow().clone()
    }
}

impl UsernameEditViewModel for MockViewModel {
    fn ui_state(&self) -> watch::Receiver<UiState> {
        self.ui_state.subscribe()
    }

    fn events(&self) -> broadcast::Receiver<EventEnvelope> {
        self.events.subscribe()
    }

    fn username_input_state(&self) -> watch::Receiver<UsernameInputState> {
        self.input.subscribe()
    }

    fn on_nickname_updated(&self, text: &str) {
        self.calls.borrow_mut().push(VmCall::Nickname(text.to_string()));
    }

    fn on_discriminator_updated(&self, text: &str) {
        self.calls
            .borrow_mut()
            .push(VmCall::Discriminator(text.to_string()));
    }

    fn on_username_submitted(&self) {
        self.calls.borrow_mut().push(VmCall::Submitted);
    }

    fn on_username_deleted(&self) {
        self.calls.borrow_mut().push(VmCall::Deleted);
    }

    fn on_username_skipped(&self) {
        self.calls.borrow_mut().push(VmCall::Skipped);
    }
}
