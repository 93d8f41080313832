//! Util 层：基础设施
//!
//! 与业务无关的代码：终端的初始化与恢复、日志文件。

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
