//! View 层：UI 渲染
//!
//! 只读 `App`：页面控件状态来自控制器的 `Surface`，
//! toast 与动画来自终端宿主。

pub mod components;
mod layout;
pub mod theme;

pub use layout::render;
