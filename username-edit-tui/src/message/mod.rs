//! Message 层：事件消息定义
//!
//! Event 层把按键翻译成这里的消息，Update 层据此驱动控制器。

mod app;

pub use app::AppMessage;
