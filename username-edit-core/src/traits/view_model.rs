//! view-model 抽象 Trait

use tokio::sync::{broadcast, watch};

use crate::types::{EventEnvelope, UiState, UsernameInputState};

/// 用户名编辑 view-model
///
/// 控制器只通过这里的三个状态流和五个命令与 view-model 交互；
/// 校验算法、可用性检查、持久化都属于实现方。
///
/// 平台实现:
/// - TUI: `LocalUsernameViewModel`（本地校验 + 模拟的异步可用性检查）
/// - 测试: `MockViewModel`
///
/// 命令使用 `&self`，实现方自行处理内部可变性。
pub trait UsernameEditViewModel {
    /// UI 状态流（新订阅者立即拿到当前值）
    fn ui_state(&self) -> watch::Receiver<UiState>;

    /// 终端事件流（一次性事件）
    fn events(&self) -> broadcast::Receiver<EventEnvelope>;

    /// 输入框状态流（每次接受编辑后发出）
    fn username_input_state(&self) -> watch::Receiver<UsernameInputState>;

    /// 用户修改了昵称
    fn on_nickname_updated(&self, text: &str);

    /// 用户修改了数字后缀
    fn on_discriminator_updated(&self, text: &str);

    /// 用户提交
    fn on_username_submitted(&self);

    /// 用户删除当前用户名
    fn on_username_deleted(&self);

    /// 用户跳过（仅注册流程）
    fn on_username_skipped(&self);
}
