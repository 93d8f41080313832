//! 配置服务
//!
//! 配置文件：`<config_dir>/username-edit/config.json`，缺失时使用默认值。
//! 命令行参数（clap）覆盖文件中的入口配置。

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use serde::{Deserialize, Serialize};
use username_edit_core::types::{EntryConfig, NextStep, UsernameLimits};

use super::view_model::DemoSettings;
use crate::view::theme::Theme;

/// 配置目录名
pub const APP_DIR_NAME: &str = "username-edit";
const CONFIG_FILE_NAME: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    pub language: String,
    pub limits: UsernameLimits,
    pub entry: EntryConfig,
    pub next_step: Option<NextStep>,

    // === 演示 view-model ===
    pub current_username: Option<String>,
    pub taken_usernames: Vec<String>,
    pub reserved_nicknames: Vec<String>,
    pub latency_ms: u64,
    pub simulate_network_failure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            limits: UsernameLimits::default(),
            entry: EntryConfig::default(),
            next_step: None,
            current_username: None,
            taken_usernames: vec!["ann.12".to_string(), "bob.42".to_string()],
            reserved_nicknames: vec!["admin".to_string()],
            latency_ms: 600,
            simulate_network_failure: false,
        }
    }
}

impl AppConfig {
    /// 演示 view-model 的参数
    pub fn demo_settings(&self) -> DemoSettings {
        DemoSettings {
            in_registration: self.entry.is_in_registration,
            current_username: self.current_username.clone(),
            taken_usernames: self.taken_usernames.clone(),
            reserved_nicknames: self.reserved_nicknames.clone(),
            limits: self.limits,
            latency: Duration::from_millis(self.latency_ms),
            network_failure: self.simulate_network_failure,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    /// 使用系统配置目录
    pub fn new() -> Self {
        Self {
            path: config_dir().map(|dir| dir.join(CONFIG_FILE_NAME)),
        }
    }

    /// 使用指定的配置文件
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let Some(path) = &self.path else {
            log::warn!("No config directory available, using defaults");
            return Ok(AppConfig::default());
        };
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Malformed config {}", path.display()))
    }
}

/// 应用的配置目录（同时存放日志）
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// 命令行覆盖项
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(
    name = "username-edit-tui",
    version,
    about = "Choose or edit a username in the terminal",
    group(ArgGroup::new("entry").args(["registration", "settings"]))
)]
pub struct CliOverrides {
    /// 从注册流程进入
    #[arg(long)]
    registration: bool,

    /// 从设置页面进入
    #[arg(long)]
    settings: bool,

    /// 注册完成后交给的下一步
    #[arg(long, value_name = "LABEL")]
    pub next_step: Option<String>,

    /// 界面语言（en-US / zh-CN）
    #[arg(long = "lang", value_name = "CODE")]
    pub language: Option<String>,

    /// 指定配置文件（只影响加载，不参与 `apply`）
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
}

impl CliOverrides {
    /// 命令行指定的入口；两个开关都没给时沿用配置文件
    pub fn registration(&self) -> Option<bool> {
        match (self.registration, self.settings) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// 按 `--config` 选择配置服务
    pub fn config_service(&self) -> LocalConfigService {
        match &self.config_path {
            Some(path) => LocalConfigService::with_path(path),
            None => LocalConfigService::new(),
        }
    }

    pub fn apply(self, config: &mut AppConfig) {
        if let Some(registration) = self.registration() {
            config.entry.is_in_registration = registration;
        }
        if let Some(label) = self.next_step {
            config.next_step = Some(NextStep::new(label));
        }
        if let Some(language) = self.language {
            config.language = language;
        }
    }
}
