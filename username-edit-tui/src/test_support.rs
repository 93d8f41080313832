//! 测试辅助：在当前 tokio 运行时上搭一个完整的 App

use std::time::Duration;

use tokio::runtime::Handle;
use username_edit_core::types::{EntryConfig, NextStep, UsernameLimits};
use username_edit_core::UsernameEditController;

use crate::backend::{DemoSettings, LocalUsernameViewModel};
use crate::model::App;

/// 延迟足够长，后台任务不会在测试期间改动状态
const FROZEN_LATENCY: Duration = Duration::from_secs(600);

pub fn test_app(in_registration: bool) -> App {
    let view_model = LocalUsernameViewModel::new(
        DemoSettings {
            in_registration,
            latency: FROZEN_LATENCY,
            ..DemoSettings::default()
        },
        Handle::current(),
    );
    let next_step = in_registration.then(|| NextStep::new("main"));
    let controller = UsernameEditController::new(
        view_model,
        EntryConfig {
            is_in_registration: in_registration,
        },
        next_step,
        UsernameLimits::default(),
    );
    App::new(controller)
}
