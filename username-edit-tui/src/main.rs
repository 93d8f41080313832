//! Username Edit TUI
//!
//! 用户名编辑页面的终端版本，采用 Elm Architecture (TEA)：
//! - **Model**: 应用状态 (`model/`)，页面控件状态由核心库的控制器持有
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 演示用 view-model 与配置 (`backend/`)
//!
//! 用法：
//!     username-edit-tui [--registration | --settings] [--next-step <label>] [--lang <code>] [--config <path>]
//!
//! 退出后在标准输出打印 `username_created=<bool>`。

mod app;
mod backend;
mod event;
mod message;
mod model;
#[cfg(test)]
mod test_support;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use username_edit_core::i18n::{set_language, Language};
use username_edit_core::UsernameEditController;

use backend::{config_dir, CliOverrides, ConfigService, LocalUsernameViewModel};
use model::SessionOutcome;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 配置（文件 + 命令行）
    let overrides = CliOverrides::parse();
    let mut config = overrides.config_service().load()?;
    overrides.apply(&mut config);

    // 2. 日志写入配置目录；guard 持有到程序结束
    let _log_guard = match config_dir() {
        Some(dir) => Some(init_logging(&dir)?),
        None => None,
    };
    tracing::info!(
        registration = config.entry.is_in_registration,
        "Starting username edit screen"
    );

    match config.language.parse::<Language>() {
        Ok(language) => set_language(language),
        Err(e) => tracing::warn!("{e}, falling back to {}", Language::EnUs.code()),
    }
    view::theme::set_theme(config.theme);

    // 3. 后台运行时（模拟网络延迟）
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .context("Failed to start the async runtime")?;

    let view_model = LocalUsernameViewModel::new(config.demo_settings(), runtime.handle().clone());
    let controller =
        UsernameEditController::new(view_model, config.entry, config.next_step.clone(), config.limits);
    let mut app = model::App::new(controller);

    // 4. 主循环；无论成功失败都恢复终端
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("Session aborted: {e:#}");
    }
    result?;

    match &app.host.outcome {
        Some(SessionOutcome::Finished {
            next_step: Some(next),
        }) => {
            tracing::info!("Handing off to {}", next.label);
            println!("next_step={}", next.label);
        }
        Some(outcome) => tracing::info!("Session ended: {outcome:?}"),
        None => tracing::info!("Session cancelled"),
    }
    println!("{}", app.host.result_line());
    Ok(())
}
