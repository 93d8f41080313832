//! Backend 层：演示用的协作方
//!
//! 控制器只认识 `UsernameEditViewModel`，这里提供它在终端里的本地实现，
//! 以及配置加载。
//!
//!     config_service      配置文件 + 命令行覆盖
//!     validator           客户端格式校验
//!     view_model          本地 view-model（模拟延迟与可用性检查）

mod config_service;
mod validator;
mod view_model;

pub use config_service::{config_dir, CliOverrides, ConfigService};
#[cfg(test)]
pub use view_model::DemoSettings;
pub use view_model::LocalUsernameViewModel;
