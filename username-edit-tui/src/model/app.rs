//! 应用主状态结构

use std::time::Instant;

use username_edit_core::{EditResult, UsernameEditController};

use super::{ErrorLineAnimation, TuiHost};
use crate::backend::LocalUsernameViewModel;

/// 页面控制器的具体类型
pub type Controller = UsernameEditController<LocalUsernameViewModel>;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 用户名编辑控制器（持有 Surface）
    pub controller: Controller,

    /// 宿主：toast / 会话结果
    pub host: TuiHost,

    /// 正在播放的错误行动画
    pub error_animation: Option<ErrorLineAnimation>,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        Self {
            should_quit: false,
            controller,
            host: TuiHost::new(),
            error_animation: None,
        }
    }

    /// 开始会话：订阅 view-model 并渲染当前状态
    pub fn start(&mut self) -> EditResult<()> {
        self.controller.start()
    }

    /// 每轮主循环调用：取出 view-model 的新状态、推进动画与 toast
    pub fn sync(&mut self, now: Instant) -> EditResult<()> {
        self.controller.poll(&mut self.host)?;

        if let Some(kind) = self.controller.take_layout_animation() {
            self.error_animation = Some(ErrorLineAnimation::new(kind, now));
        }
        if self
            .error_animation
            .is_some_and(|animation| animation.is_finished(now))
        {
            self.error_animation = None;
        }

        self.host.expire_toast(now);
        // 会话已结束：等关闭时弹出的 toast 显示完再退出
        if self.is_closing() && self.host.toast.is_none() {
            self.should_quit = true;
        }
        Ok(())
    }

    /// 终端事件已结束会话，界面只剩下最后的提示
    pub fn is_closing(&self) -> bool {
        self.host.outcome.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use username_edit_core::types::{EventEnvelope, TerminalEvent};

    use crate::model::host::TOAST_DURATION;
    use crate::test_support::test_app;

    fn deliver(app: &mut App, event: TerminalEvent) {
        app.controller
            .handle_event(EventEnvelope::new(1, event), &mut app.host);
    }

    #[tokio::test]
    async fn test_delete_toast_outlives_session() {
        let mut app = test_app(false);
        app.start().unwrap();
        deliver(&mut app, TerminalEvent::DeleteSuccess);

        let shown_at = app.host.toast.as_ref().unwrap().shown_at;
        app.sync(shown_at).unwrap();
        assert!(app.is_closing());
        assert!(!app.should_quit);
        assert_eq!(app.host.toast.as_ref().unwrap().text, "Username removed.");

        app.sync(shown_at + TOAST_DURATION).unwrap();
        assert!(app.should_quit);
        assert_eq!(app.host.result_line(), "username_created=false");
    }

    #[tokio::test]
    async fn test_silent_close_quits_immediately() {
        let mut app = test_app(true);
        app.start().unwrap();
        deliver(&mut app, TerminalEvent::SubmitSuccess);

        app.sync(Instant::now()).unwrap();
        assert!(app.should_quit);
        assert_eq!(app.host.result_line(), "username_created=true");
    }
}
