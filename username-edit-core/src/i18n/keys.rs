//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **校验错误归 `validation.*`**：输入框下方的内联错误，带 `{min}` / `{max}` / `{count}` 占位符
//! 2. **一次性提示归 `notices.*`**：终端事件触发的 toast
//! 3. **页面内容归 `screen.*`**：标题、标签、按钮
//! 4. **说明对话框归 `learn_more.*`**
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示
//! 6. **跨组件复用归 `common.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 内联校验错误（模板）
    pub validation: ValidationTexts,
    /// toast 提示
    pub notices: NoticeTexts,
    /// 页面文本
    pub screen: ScreenTexts,
    /// "这个数字是什么" 对话框
    pub learn_more: LearnMoreTexts,
    /// 键盘提示
    pub hints: HintTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub ok: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    pub loading: &'static str,
}

// ============================================================================
// 校验错误
// ============================================================================

/// 内联校验错误
pub struct ValidationTexts {
    /// 占位符：`{min}` `{max}`
    pub length_between: &'static str,
    pub invalid_characters: &'static str,
    pub cannot_start_with_number: &'static str,
    pub invalid_generic: &'static str,
    pub taken: &'static str,
    /// 数字后缀非法 / 不可用共用此文本
    pub discriminator_not_available: &'static str,
    /// 占位符：`{count}`
    pub discriminator_max_digits: &'static str,
    /// 占位符：`{count}`
    pub discriminator_min_digits: &'static str,
}

// ============================================================================
// Toast 提示
// ============================================================================

pub struct NoticeTexts {
    pub username_taken: &'static str,
    pub username_invalid: &'static str,
    pub username_removed: &'static str,
    pub network_error: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

pub struct ScreenTexts {
    /// 注册流程标题
    pub title_add: &'static str,
    /// 设置页面标题
    pub title_edit: &'static str,
    /// 摘要占位提示
    pub choose_your_username: &'static str,
    pub nickname_label: &'static str,
    pub discriminator_label: &'static str,
    pub description: &'static str,
    pub learn_more_link: &'static str,
    pub submit: &'static str,
    pub delete: &'static str,
    pub done: &'static str,
    pub skip: &'static str,
    pub saving: &'static str,
}

pub struct LearnMoreTexts {
    pub title: &'static str,
    pub message: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub alt_s: &'static str,
    pub alt_d: &'static str,
    pub alt_k: &'static str,
    pub f1: &'static str,
    pub ctrl_c: &'static str,
}

/// 动作描述
pub struct ActionTexts {
    pub switch_field: &'static str,
    pub submit: &'static str,
    pub delete: &'static str,
    pub skip: &'static str,
    pub learn_more: &'static str,
    pub back: &'static str,
    pub close: &'static str,
}
