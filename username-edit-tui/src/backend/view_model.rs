//! 本地 view-model（演示用）
//!
//! 在内存中维护"当前用户名"与已占用的用户名集合，用 tokio 任务模拟
//! 网络延迟：输入完整后做一次可用性检查，提交 / 删除在延迟后发出终端事件。
//!
//! 所有状态都经由 watch / broadcast 发出，命令只写共享状态，不直接碰 UI。

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{broadcast, watch};
use username_edit_core::types::{
    ButtonState, EventChannel, EventEnvelope, TerminalEvent, UiState, UsernameInputState,
    UsernameLimits, UsernameResolution, UsernameState, ValidationStatus,
};
use username_edit_core::UsernameEditViewModel;

use super::validator::{format_username, UsernameValidator};

/// 演示 view-model 的启动参数
#[derive(Debug, Clone)]
pub struct DemoSettings {
    pub in_registration: bool,
    pub current_username: Option<String>,
    pub taken_usernames: Vec<String>,
    /// 服务端会拒绝的昵称
    pub reserved_nicknames: Vec<String>,
    pub limits: UsernameLimits,
    pub latency: Duration,
    pub network_failure: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            in_registration: false,
            current_username: None,
            taken_usernames: Vec::new(),
            reserved_nicknames: Vec::new(),
            limits: UsernameLimits::default(),
            latency: Duration::from_millis(600),
            network_failure: false,
        }
    }
}

/// 模拟的服务端用户名表
#[derive(Debug)]
struct Registry {
    current: Option<String>,
    taken: HashSet<String>,
    reserved: HashSet<String>,
}

struct Shared {
    ui_state: watch::Sender<UiState>,
    input: watch::Sender<UsernameInputState>,
    events: EventChannel,
    registry: Mutex<Registry>,
    validator: UsernameValidator,
    in_registration: bool,
    latency: Duration,
    network_failure: bool,
    /// 每次输入 / 提交递增，过期的检查结果直接丢弃
    generation: AtomicU64,
}

impl Shared {
    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn set_ui(&self, f: impl FnOnce(&mut UiState)) {
        self.ui_state.send_modify(f);
    }
}

pub struct LocalUsernameViewModel {
    shared: Arc<Shared>,
    handle: Handle,
}

impl LocalUsernameViewModel {
    /// 创建 view-model 并在后台"加载"当前用户名
    pub fn new(settings: DemoSettings, handle: Handle) -> Self {
        let registry = Registry {
            current: settings.current_username.clone(),
            taken: settings
                .taken_usernames
                .iter()
                .chain(settings.current_username.iter())
                .map(|name| name.to_lowercase())
                .collect(),
            reserved: settings
                .reserved_nicknames
                .iter()
                .map(|name| name.to_lowercase())
                .collect(),
        };

        let shared = Arc::new(Shared {
            ui_state: watch::Sender::new(UiState::default()),
            input: watch::Sender::new(UsernameInputState::default()),
            events: EventChannel::default(),
            registry: Mutex::new(registry),
            validator: UsernameValidator::new(settings.limits),
            in_registration: settings.in_registration,
            latency: settings.latency,
            network_failure: settings.network_failure,
            generation: AtomicU64::new(0),
        });

        let vm = Self { shared, handle };
        vm.load_current_username();
        vm
    }

    fn load_current_username(&self) {
        let shared = Arc::clone(&self.shared);
        self.handle.spawn(async move {
            tokio::time::sleep(shared.latency).await;

            let current = shared.registry().current.clone();
            let resolution = match &current {
                Some(name) => UsernameResolution::Resolved(name.clone()),
                None => UsernameResolution::Unset,
            };
            log::debug!("Loaded current username: {resolution:?}");
            shared.set_ui(|s| s.username_state.resolution = resolution);

            // 已有用户名时预填输入框
            if let Some((nickname, discriminator)) =
                current.as_deref().and_then(|name| name.split_once('.'))
            {
                shared
                    .input
                    .send_replace(UsernameInputState::new(nickname, discriminator));
                revalidate(&shared, &Handle::current());
            }
        });
    }

    fn spawn_action(&self, action: Action) {
        let shared = Arc::clone(&self.shared);
        let generation = shared.bump_generation();
        self.handle.spawn(async move {
            tokio::time::sleep(shared.latency).await;
            if !shared.is_current(generation) {
                log::debug!("Discarding stale {action:?}");
                return;
            }
            let event = match action {
                Action::Submit => finish_submit(&shared),
                Action::Delete => finish_delete(&shared),
            };
            shared.events.emit(event);
        });
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Submit,
    Delete,
}

/// 根据当前输入重新计算状态；完整且合法的输入触发一次异步可用性检查
fn revalidate(shared: &Arc<Shared>, handle: &Handle) {
    let input = shared.input.borrow().clone();
    let generation = shared.bump_generation();
    let status = shared.validator.check(&input.nickname, &input.discriminator);

    let current = shared.registry().current.clone();
    let candidate = format_username(&input.nickname, &input.discriminator);

    if input.is_empty() || status.is_error() {
        shared.set_ui(|s| {
            s.username_status = status;
            s.button_state = ButtonState::SubmitDisabled;
            s.username_state.in_progress = false;
        });
        return;
    }

    if !shared.in_registration && current.as_deref() == Some(candidate.as_str()) {
        shared.set_ui(|s| {
            s.username_status = ValidationStatus::None;
            s.button_state = ButtonState::Delete;
            s.username_state.in_progress = false;
        });
        return;
    }

    if input.nickname.is_empty() || input.discriminator.is_empty() {
        shared.set_ui(|s| {
            s.username_status = ValidationStatus::None;
            s.button_state = ButtonState::SubmitDisabled;
            s.username_state.in_progress = false;
        });
        return;
    }

    shared.set_ui(|s| {
        s.username_status = ValidationStatus::None;
        s.button_state = ButtonState::SubmitDisabled;
        s.username_state.in_progress = true;
    });

    let shared = Arc::clone(shared);
    handle.spawn(async move {
        tokio::time::sleep(shared.latency / 2).await;
        if !shared.is_current(generation) {
            return;
        }
        let taken = shared.registry().taken.contains(&candidate.to_lowercase());
        log::debug!("Availability of {candidate}: taken = {taken}");
        shared.set_ui(|s| {
            s.username_state.in_progress = false;
            if taken {
                s.username_status = ValidationStatus::Taken;
                s.button_state = ButtonState::SubmitDisabled;
            } else {
                s.button_state = ButtonState::Submit;
            }
        });
    });
}

fn finish_submit(shared: &Shared) -> TerminalEvent {
    if shared.network_failure {
        shared.set_ui(|s| s.button_state = ButtonState::Submit);
        return TerminalEvent::NetworkFailure;
    }

    let input = shared.input.borrow().clone();
    let candidate = format_username(&input.nickname, &input.discriminator);
    let key = candidate.to_lowercase();

    let mut registry = shared.registry();
    if registry.reserved.contains(&input.nickname.to_lowercase()) {
        drop(registry);
        shared.set_ui(|s| {
            s.username_status = ValidationStatus::InvalidGeneric;
            s.button_state = ButtonState::SubmitDisabled;
        });
        return TerminalEvent::SubmitFailInvalid;
    }
    if registry.taken.contains(&key) {
        drop(registry);
        shared.set_ui(|s| {
            s.username_status = ValidationStatus::Taken;
            s.button_state = ButtonState::SubmitDisabled;
        });
        return TerminalEvent::SubmitFailTaken;
    }

    if let Some(old) = registry.current.replace(candidate.clone()) {
        registry.taken.remove(&old.to_lowercase());
    }
    registry.taken.insert(key);
    drop(registry);

    log::info!("Username set to {candidate}");
    shared.set_ui(|s| {
        s.username_state = UsernameState::resolved(candidate);
        s.button_state = ButtonState::Submit;
    });
    TerminalEvent::SubmitSuccess
}

fn finish_delete(shared: &Shared) -> TerminalEvent {
    if shared.network_failure {
        shared.set_ui(|s| s.button_state = ButtonState::Delete);
        return TerminalEvent::NetworkFailure;
    }

    let mut registry = shared.registry();
    if let Some(old) = registry.current.take() {
        registry.taken.remove(&old.to_lowercase());
        log::info!("Username {old} deleted");
    }
    drop(registry);

    shared.input.send_replace(UsernameInputState::default());
    shared.set_ui(|s| {
        s.username_state = UsernameState::unset();
        s.username_status = ValidationStatus::None;
        s.button_state = ButtonState::SubmitDisabled;
    });
    TerminalEvent::DeleteSuccess
}

impl UsernameEditViewModel for LocalUsernameViewModel {
    fn ui_state(&self) -> watch::Receiver<UiState> {
        self.shared.ui_state.subscribe()
    }

    fn events(&self) -> broadcast::Receiver<EventEnvelope> {
        self.shared.events.subscribe()
    }

    fn username_input_state(&self) -> watch::Receiver<UsernameInputState> {
        self.shared.input.subscribe()
    }

    fn on_nickname_updated(&self, text: &str) {
        self.shared
            .input
            .send_modify(|s| s.nickname = text.to_string());
        revalidate(&self.shared, &self.handle);
    }

    fn on_discriminator_updated(&self, text: &str) {
        self.shared
            .input
            .send_modify(|s| s.discriminator = text.to_string());
        revalidate(&self.shared, &self.handle);
    }

    fn on_username_submitted(&self) {
        let state = self.shared.ui_state.borrow().button_state;
        if state != ButtonState::Submit {
            log::debug!("Submit ignored in {state:?}");
            return;
        }
        self.shared
            .set_ui(|s| s.button_state = ButtonState::SubmitLoading);
        self.spawn_action(Action::Submit);
    }

    fn on_username_deleted(&self) {
        let state = self.shared.ui_state.borrow().button_state;
        if state != ButtonState::Delete {
            log::debug!("Delete ignored in {state:?}");
            return;
        }
        self.shared
            .set_ui(|s| s.button_state = ButtonState::DeleteLoading);
        self.spawn_action(Action::Delete);
    }

    fn on_username_skipped(&self) {
        if self.shared.in_registration {
            self.shared.events.emit(TerminalEvent::Skipped);
        } else {
            log::warn!("Skip requested outside registration");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    const LATENCY: Duration = Duration::from_millis(5);

    fn settings() -> DemoSettings {
        DemoSettings {
            latency: LATENCY,
            taken_usernames: vec!["bob.42".to_string()],
            ..DemoSettings::default()
        }
    }

    /// 等待 UI 状态满足条件
    async fn wait_for(rx: &mut watch::Receiver<UiState>, f: impl Fn(&UiState) -> bool) -> UiState {
        let state = tokio::time::timeout(Duration::from_secs(2), rx.wait_for(|s| f(s)))
            .await
            .unwrap()
            .unwrap();
        state.clone()
    }

    async fn next_event(rx: &mut broadcast::Receiver<EventEnvelope>) -> TerminalEvent {
        tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap()
            .event
    }

    /// 新建 view-model 并等待当前用户名加载完成
    async fn loaded(settings: DemoSettings) -> LocalUsernameViewModel {
        let vm = LocalUsernameViewModel::new(settings, Handle::current());
        wait_for(&mut vm.ui_state(), |s| !s.username_state.is_loading()).await;
        vm
    }

    fn type_username(vm: &LocalUsernameViewModel, nickname: &str, discriminator: &str) {
        vm.on_nickname_updated(nickname);
        vm.on_discriminator_updated(discriminator);
    }

    #[tokio::test]
    async fn test_loads_unset_username() {
        let vm = LocalUsernameViewModel::new(settings(), Handle::current());
        let mut ui = vm.ui_state();
        let state = wait_for(&mut ui, |s| !s.username_state.is_loading()).await;
        assert_eq!(state.username_state.resolution, UsernameResolution::Unset);
        assert_eq!(state.button_state, ButtonState::SubmitDisabled);
    }

    #[tokio::test]
    async fn test_existing_username_prefills_input() {
        let vm = LocalUsernameViewModel::new(
            DemoSettings {
                current_username: Some("ann.12".to_string()),
                ..settings()
            },
            Handle::current(),
        );
        let mut ui = vm.ui_state();
        let state = wait_for(&mut ui, |s| s.button_state == ButtonState::Delete).await;
        assert_eq!(state.username_state.username(), Some("ann.12"));
        assert_eq!(
            *vm.username_input_state().borrow(),
            UsernameInputState::new("ann", "12")
        );
    }

    #[tokio::test]
    async fn test_invalid_input_reports_status() {
        let vm = LocalUsernameViewModel::new(settings(), Handle::current());
        vm.on_nickname_updated("an");
        let state = vm.ui_state().borrow().clone();
        assert_eq!(state.username_status, ValidationStatus::TooShort);
        assert_eq!(state.button_state, ButtonState::SubmitDisabled);
    }

    #[tokio::test]
    async fn test_taken_username_is_detected() {
        let vm = loaded(settings()).await;
        let mut ui = vm.ui_state();
        type_username(&vm, "bob", "42");
        let state = wait_for(&mut ui, |s| s.username_status == ValidationStatus::Taken).await;
        assert_eq!(state.button_state, ButtonState::SubmitDisabled);
    }

    #[tokio::test]
    async fn test_submit_success() {
        let vm = loaded(settings()).await;
        let mut ui = vm.ui_state();
        let mut events = vm.events();

        type_username(&vm, "ann", "12");
        wait_for(&mut ui, |s| s.button_state == ButtonState::Submit).await;
        vm.on_username_submitted();
        assert_eq!(ui.borrow().button_state, ButtonState::SubmitLoading);

        assert_eq!(next_event(&mut events).await, TerminalEvent::SubmitSuccess);
        assert_eq!(
            ui.borrow().username_state.username(),
            Some("ann.12")
        );
    }

    #[tokio::test]
    async fn test_network_failure_restores_button() {
        let vm = loaded(DemoSettings {
            network_failure: true,
            ..settings()
        })
        .await;
        let mut ui = vm.ui_state();
        let mut events = vm.events();

        type_username(&vm, "ann", "12");
        wait_for(&mut ui, |s| s.button_state == ButtonState::Submit).await;
        vm.on_username_submitted();

        assert_eq!(next_event(&mut events).await, TerminalEvent::NetworkFailure);
        assert_eq!(ui.borrow().button_state, ButtonState::Submit);
    }

    #[tokio::test]
    async fn test_reserved_nickname_is_rejected_on_submit() {
        let vm = loaded(DemoSettings {
            reserved_nicknames: vec!["admin".to_string()],
            ..settings()
        })
        .await;
        let mut ui = vm.ui_state();
        let mut events = vm.events();

        type_username(&vm, "admin", "12");
        wait_for(&mut ui, |s| s.button_state == ButtonState::Submit).await;
        vm.on_username_submitted();
        assert_eq!(next_event(&mut events).await, TerminalEvent::SubmitFailInvalid);
    }

    #[tokio::test]
    async fn test_delete_clears_username() {
        let vm = LocalUsernameViewModel::new(
            DemoSettings {
                current_username: Some("ann.12".to_string()),
                ..settings()
            },
            Handle::current(),
        );
        let mut ui = vm.ui_state();
        let mut events = vm.events();

        wait_for(&mut ui, |s| s.button_state == ButtonState::Delete).await;
        vm.on_username_deleted();
        assert_eq!(next_event(&mut events).await, TerminalEvent::DeleteSuccess);
        assert_eq!(
            ui.borrow().username_state.resolution,
            UsernameResolution::Unset
        );
        assert!(vm.username_input_state().borrow().is_empty());
    }

    #[tokio::test]
    async fn test_skip_only_in_registration() {
        let vm = LocalUsernameViewModel::new(settings(), Handle::current());
        let mut events = vm.events();
        vm.on_username_skipped();
        assert!(events.try_recv().is_err());

        let vm = LocalUsernameViewModel::new(
            DemoSettings {
                in_registration: true,
                ..settings()
            },
            Handle::current(),
        );
        let mut events = vm.events();
        vm.on_username_skipped();
        assert_eq!(next_event(&mut events).await, TerminalEvent::Skipped);
    }
}
