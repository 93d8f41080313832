//! 应用主消息枚举

use username_edit_core::surface::FieldEdit;

/// 应用主消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用（不设置结果）
    Quit,

    /// 编辑当前输入框
    Edit(FieldEdit),

    /// 切换输入框
    SwitchField,

    /// Enter：昵称框跳到后缀框，后缀框即"完成"
    Confirm,

    /// 提交（设置页面）/ 完成（注册流程）
    Submit,

    /// 删除当前用户名
    Delete,

    /// 跳过（注册流程）
    Skip,

    /// 打开"这个数字是什么"说明
    ShowLearnMore,

    /// 关闭对话框
    CloseDialog,

    /// 返回上一页
    GoBack,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
