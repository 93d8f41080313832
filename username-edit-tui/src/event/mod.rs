//! Event 层：输入处理
//!
//! 把键盘事件翻译成 `AppMessage`：
//!     Ctrl+c      退出
//!     Tab         切换输入框
//!     Enter       昵称 → 后缀；在后缀框中即"完成"
//!     Alt+s       提交 / 完成
//!     Alt+d       删除
//!     Alt+k       跳过
//!     F1          说明对话框
//!     Esc         关闭对话框 / 返回

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
