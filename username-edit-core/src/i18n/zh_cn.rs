//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, HintTexts, KeyNames, LearnMoreTexts, NoticeTexts, ScreenTexts,
    Translations, ValidationTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "用户名",
        ok: "确定",
        back: "返回",
        quit: "退出",
        loading: "加载中...",
    },

    // ========================================================================
    // 校验错误
    // ========================================================================
    validation: ValidationTexts {
        length_between: "用户名长度必须在 {min} 到 {max} 个字符之间。",
        invalid_characters: "用户名只能包含 a–Z、0–9 和下划线。",
        cannot_start_with_number: "用户名不能以数字开头。",
        invalid_generic: "用户名无效。",
        taken: "该用户名已被占用。",
        discriminator_not_available: "该用户名不可用，请换一个数字。",
        discriminator_max_digits: "用户名无效，最多输入 {count} 位数字。",
        discriminator_min_digits: "用户名无效，至少输入 {count} 位数字。",
    },

    // ========================================================================
    // Toast 提示
    // ========================================================================
    notices: NoticeTexts {
        username_taken: "该用户名已被占用。",
        username_invalid: "用户名无效。",
        username_removed: "已移除用户名。",
        network_error: "网络错误，请稍后再试。",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    screen: ScreenTexts {
        title_add: "添加用户名",
        title_edit: "用户名",
        choose_your_username: "选择你的用户名",
        nickname_label: "用户名",
        discriminator_label: "数字",
        description: "用户名与一组数字配对。知道你完整用户名的人可以给你发消息。",
        learn_more_link: "了解更多",
        submit: "保存",
        delete: "删除",
        done: "完成",
        skip: "跳过",
        saving: "保存中...",
    },

    learn_more: LearnMoreTexts {
        title: "这个数字是什么？",
        message: "这些数字有助于保护你的用户名隐私，避免收到不想要的消息。只与你想聊天的人和群组分享你的用户名。更换用户名后你会得到一组新的数字。",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            alt_s: "Alt+s",
            alt_d: "Alt+d",
            alt_k: "Alt+k",
            f1: "F1",
            ctrl_c: "Ctrl+c",
        },
        actions: ActionTexts {
            switch_field: "切换输入框",
            submit: "提交",
            delete: "删除",
            skip: "跳过",
            learn_more: "了解更多",
            back: "返回",
            close: "关闭",
        },
    },
};
