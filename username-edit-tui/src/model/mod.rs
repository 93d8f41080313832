//! Model 层：应用状态
//!
//! 页面本身的控件状态由核心库的控制器持有（`Surface`），
//! 这里只保存终端特有的部分：宿主副作用与动画时钟。

mod animation;
mod app;
mod host;

pub use animation::ErrorLineAnimation;
pub use app::App;
pub use host::{SessionOutcome, TuiHost};
