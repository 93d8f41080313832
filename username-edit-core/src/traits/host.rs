//! 宿主外壳抽象 Trait

use crate::types::NextStep;

/// 结果约定的请求键：`username_created` -> bool，缺省读作 `false`
pub const USERNAME_CREATED_KEY: &str = "username_created";

/// 宿主外壳（导航、提示、结果回传）
///
/// 事件分发器只通过此 trait 产生副作用。
pub trait UsernameEditHost {
    /// 向上回传 "用户名已创建" 结果（每个会话最多一次）
    fn set_username_created(&mut self, created: bool);

    /// 显示短暂提示（toast）
    fn show_toast(&mut self, message: &str);

    /// 返回上一页
    fn pop_back_stack(&mut self);

    /// 启动注册流程的下一步
    fn launch_next_step(&mut self, next_step: NextStep);

    /// 结束当前会话
    fn finish(&mut self);
}
