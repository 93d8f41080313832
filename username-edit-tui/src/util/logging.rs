//! 日志初始化
//!
//! 终端被 UI 占用，日志写入配置目录下的文件。
//! 核心库使用 `log` 门面，由 tracing-subscriber 的 `tracing-log` 桥接收集。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
const LOG_FILE_NAME: &str = "username-edit.log";

/// 安装全局订阅者；返回的 guard 必须保持到程序退出，否则缓冲的日志会丢失
pub fn init_logging(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(guard)
}
