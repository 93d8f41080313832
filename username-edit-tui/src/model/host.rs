//! 终端宿主
//!
//! 把控制器的副作用落到终端状态上：toast 行、会话结果、退出。

use std::time::{Duration, Instant};

use username_edit_core::traits::{UsernameEditHost, USERNAME_CREATED_KEY};
use username_edit_core::types::NextStep;

/// toast 显示时长
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// 短暂提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub shown_at: Instant,
}

/// 会话如何结束
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// 返回上一页（设置页面）
    PoppedBack,
    /// 注册流程结束，可能交给下一步
    Finished { next_step: Option<NextStep> },
}

#[derive(Debug, Default)]
pub struct TuiHost {
    pub toast: Option<Toast>,
    pub outcome: Option<SessionOutcome>,
    username_created: Option<bool>,
    launched: Option<NextStep>,
}

impl TuiHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// 没有设置过结果时视为 `false`
    pub fn username_created(&self) -> bool {
        self.username_created.unwrap_or(false)
    }

    /// 结果行，退出后打印给调用方
    pub fn result_line(&self) -> String {
        format!("{USERNAME_CREATED_KEY}={}", self.username_created())
    }

    /// 过期的 toast 在这里清掉
    pub fn expire_toast(&mut self, now: Instant) {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| now.duration_since(toast.shown_at) >= TOAST_DURATION)
        {
            self.toast = None;
        }
    }
}

impl UsernameEditHost for TuiHost {
    fn set_username_created(&mut self, created: bool) {
        self.username_created = Some(created);
    }

    fn show_toast(&mut self, message: &str) {
        log::info!("Toast: {message}");
        self.toast = Some(Toast {
            text: message.to_string(),
            shown_at: Instant::now(),
        });
    }

    fn pop_back_stack(&mut self) {
        self.outcome = Some(SessionOutcome::PoppedBack);
    }

    fn launch_next_step(&mut self, next_step: NextStep) {
        log::info!("Handing off to next step: {}", next_step.label);
        self.launched = Some(next_step);
    }

    fn finish(&mut self) {
        self.outcome = Some(SessionOutcome::Finished {
            next_step: self.launched.take(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_result_reads_false() {
        let host = TuiHost::new();
        assert!(!host.username_created());
        assert_eq!(host.result_line(), "username_created=false");
    }

    #[test]
    fn test_finish_carries_launched_step() {
        let mut host = TuiHost::new();
        host.set_username_created(true);
        host.launch_next_step(NextStep::new("main"));
        host.finish();

        assert_eq!(host.result_line(), "username_created=true");
        assert_eq!(
            host.outcome,
            Some(SessionOutcome::Finished {
                next_step: Some(NextStep::new("main"))
            })
        );
    }

    #[test]
    fn test_toast_expires() {
        let mut host = TuiHost::new();
        host.show_toast("Username removed.");
        let shown_at = host.toast.as_ref().map(|t| t.shown_at);

        host.expire_toast(Instant::now());
        assert!(host.toast.is_some());

        if let Some(shown_at) = shown_at {
            host.expire_toast(shown_at + TOAST_DURATION);
        }
        assert!(host.toast.is_none());
    }
}
