//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, HintTexts, KeyNames, LearnMoreTexts, NoticeTexts, ScreenTexts,
    Translations, ValidationTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Username",
        ok: "OK",
        back: "Back",
        quit: "Quit",
        loading: "Loading...",
    },

    // ========================================================================
    // 校验错误
    // ========================================================================
    validation: ValidationTexts {
        length_between: "Usernames must be between {min} and {max} characters.",
        invalid_characters: "Usernames can only include a–Z, 0–9, and underscores.",
        cannot_start_with_number: "Usernames cannot begin with a number.",
        invalid_generic: "Username is invalid.",
        taken: "This username is taken.",
        discriminator_not_available: "This username is not available, try another number.",
        discriminator_max_digits: "Invalid username, enter a maximum of {count} digits.",
        discriminator_min_digits: "Invalid username, enter a minimum of {count} digits.",
    },

    // ========================================================================
    // Toast 提示
    // ========================================================================
    notices: NoticeTexts {
        username_taken: "This username is taken.",
        username_invalid: "Username is invalid.",
        username_removed: "Username removed.",
        network_error: "Encountered a network error. Try again later.",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    screen: ScreenTexts {
        title_add: "Add a username",
        title_edit: "Username",
        choose_your_username: "Choose your username",
        nickname_label: "Username",
        discriminator_label: "Number",
        description: "Usernames are paired with a set of digits. People can message you if they know your full username.",
        learn_more_link: "Learn more",
        submit: "Save",
        delete: "Delete",
        done: "Done",
        skip: "Skip",
        saving: "Saving...",
    },

    learn_more: LearnMoreTexts {
        title: "What is this number?",
        message: "These digits help keep your username private so you can avoid unwanted messages. Share your username with only the people and groups you'd like to chat with. If you change usernames you'll get a new set of digits.",
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
            switch_field: "Switch field",
            submit: "Submit",
            delete: "Delete",
            skip: "Skip",
            learn_more: "Learn more",
            back: "Back",
            close: "Close",
        },
    },
};
