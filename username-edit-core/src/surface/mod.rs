//! 控件状态（Surface）
//!
//! 控制器写入、渲染层读取的纯数据：两个输入框、错误行、按钮、摘要、进度、工具栏、对话框。
//! 不依赖任何终端或 GUI 库，TUI 与测试都直接读取这里的字段。

mod layout;
mod text_field;

pub use layout::{LayoutAnimation, LayoutTransition, RenderBatch, TransitionMode};
pub use text_field::{FieldEdit, FieldId, TextChange, TextField};

/// 强调色（主题）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Accent {
    /// 正常主题
    #[default]
    Primary,
    /// 错误主题
    Error,
}

/// 不透明度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Opacity {
    #[default]
    Full,
    /// 禁用态（半透明）
    Dimmed,
}

/// 操作按钮
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionButton {
    pub visible: bool,
    pub enabled: bool,
    pub opacity: Opacity,
    /// 按钮内的旋转进度
    pub spinning: bool,
}

impl ActionButton {
    /// 是否响应点击
    pub fn is_actionable(&self) -> bool {
        self.visible && self.enabled && !self.spinning
    }
}

/// 内联错误行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLine {
    pub visible: bool,
    pub text: Option<String>,
}

/// 摘要（已选用户名或占位提示）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub text: String,
    pub opacity: Opacity,
}

/// 工具栏
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toolbar {
    pub title: String,
    /// 是否显示返回导航
    pub back_navigation: bool,
}

/// 对话框
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// "这个数字是什么？" 说明
    LearnMore,
}

/// 整个页面的控件状态
#[derive(Debug, Clone)]
pub struct Surface {
    pub nickname: TextField,
    pub discriminator: TextField,
    /// 当前获得焦点的输入框
    pub focus: FieldId,

    /// 输入框下划线 / 提示文字的强调色
    pub hint_accent: Accent,
    pub error: ErrorLine,

    /// 设置页面：提交 / 删除
    pub submit_button: ActionButton,
    pub delete_button: ActionButton,
    /// 注册流程：完成 / 跳过
    pub done_button: ActionButton,
    pub skip_button: ActionButton,
    /// 注册流程的整页进度卡片
    pub progress_card_visible: bool,
    /// 输入框尾部的小进度指示
    pub suffix_progress_visible: bool,

    pub summary: Summary,
    pub toolbar: Toolbar,
    pub dialog: Option<Dialog>,
    pub layout: LayoutTransition,
}

impl Surface {
    pub fn new() -> Self {
        Self {
            nickname: TextField::new(FieldId::Nickname),
            discriminator: TextField::new(FieldId::Discriminator),
            focus: FieldId::Nickname,
            hint_accent: Accent::Primary,
            error: ErrorLine::default(),
            submit_button: ActionButton::default(),
            delete_button: ActionButton::default(),
            done_button: ActionButton::default(),
            skip_button: ActionButton::default(),
            progress_card_visible: false,
            suffix_progress_visible: false,
            summary: Summary::default(),
            toolbar: Toolbar::default(),
            dialog: None,
            layout: LayoutTransition::new(),
        }
    }

    pub fn field(&self, id: FieldId) -> &TextField {
        match id {
            FieldId::Nickname => &self.nickname,
            FieldId::Discriminator => &self.discriminator,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut TextField {
        match id {
            FieldId::Nickname => &mut self.nickname,
            FieldId::Discriminator => &mut self.discriminator,
        }
    }

    /// 进入批量渲染：作用域内所有修改都不触发动画
    pub fn batch(&mut self) -> RenderBatch<'_> {
        RenderBatch::begin(self)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}
