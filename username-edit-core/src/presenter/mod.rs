//! 展示单元
//!
//! 每个单元把一种输入（状态、事件）渲染到 `Surface` 上：
//!     error_message       校验状态 → 内联错误 + 主题
//!     text_sync           输入状态 → 两个输入框（无回声）
//!     buttons             按钮状态 → 按模式的按钮外观
//!     summary             用户名解析状态 → 摘要 + 进度
//!     events              终端事件 → 宿主副作用

pub mod buttons;
pub mod error_message;
pub mod events;
pub mod summary;
pub mod text_sync;

pub use buttons::ButtonRenderer;
pub use error_message::{error_message, present_status};
pub use events::{DispatchOutcome, EventDispatcher};
pub use summary::{present_progress, present_summary};
pub use text_sync::TextSyncBridge;
