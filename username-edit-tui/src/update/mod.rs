//! Update 层：消费消息，驱动控制器
//!
//! 控制器负责所有页面语义（禁用状态、回声抑制、按钮可用性），
//! 这里只做按键意图到控制器手势的映射。

use username_edit_core::FieldId;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    // 会话结束后只剩提示在显示，任意按键直接退出
    if app.is_closing() {
        if msg != AppMessage::Noop {
            app.should_quit = true;
        }
        return;
    }

    let controller = &mut app.controller;

    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Edit(edit) => {
            let focus = controller.surface().focus;
            controller.edit_field(focus, edit);
        }

        AppMessage::SwitchField => controller.toggle_focus(),

        AppMessage::Confirm => match controller.surface().focus {
            FieldId::Nickname => controller.focus_field(FieldId::Discriminator),
            FieldId::Discriminator => controller.editor_done(),
        },

        AppMessage::Submit => {
            if controller.mode().is_registration() {
                controller.done_clicked();
            } else {
                controller.submit_clicked();
            }
        }

        AppMessage::Delete => controller.delete_clicked(),

        AppMessage::Skip => controller.skip_clicked(),

        AppMessage::ShowLearnMore => controller.show_learn_more(),

        AppMessage::CloseDialog => controller.dismiss_dialog(),

        AppMessage::GoBack => {
            if controller.surface().dialog.is_some() {
                controller.dismiss_dialog();
            } else if controller.navigate_back(&mut app.host) {
                app.should_quit = true;
            }
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use username_edit_core::surface::{Dialog, FieldEdit};
    use username_edit_core::types::{EventEnvelope, TerminalEvent};

    use crate::model::SessionOutcome;
    use crate::test_support::test_app;

    #[tokio::test]
    async fn test_typing_goes_to_focused_field() {
        let mut app = test_app(false);
        app.start().unwrap();

        update(&mut app, AppMessage::Edit(FieldEdit::Insert('a')));
        update(&mut app, AppMessage::Confirm);
        update(&mut app, AppMessage::Edit(FieldEdit::Insert('7')));

        let surface = app.controller.surface();
        assert_eq!(surface.nickname.text(), "a");
        assert_eq!(surface.discriminator.text(), "7");
        assert_eq!(surface.focus, FieldId::Discriminator);
    }

    #[tokio::test]
    async fn test_switch_field_toggles_focus() {
        let mut app = test_app(false);
        update(&mut app, AppMessage::SwitchField);
        assert_eq!(app.controller.surface().focus, FieldId::Discriminator);
        update(&mut app, AppMessage::SwitchField);
        assert_eq!(app.controller.surface().focus, FieldId::Nickname);
    }

    #[tokio::test]
    async fn test_go_back_closes_dialog_first() {
        let mut app = test_app(false);
        app.start().unwrap();

        update(&mut app, AppMessage::ShowLearnMore);
        assert_eq!(app.controller.surface().dialog, Some(Dialog::LearnMore));

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.controller.surface().dialog, None);
        assert!(!app.should_quit);

        update(&mut app, AppMessage::GoBack);
        assert!(app.should_quit);
        assert_eq!(app.host.outcome, Some(SessionOutcome::PoppedBack));
    }

    #[tokio::test]
    async fn test_go_back_is_ignored_in_registration() {
        let mut app = test_app(true);
        app.start().unwrap();
        update(&mut app, AppMessage::GoBack);
        assert!(!app.should_quit);
        assert!(app.host.outcome.is_none());
    }

    #[tokio::test]
    async fn test_keys_after_close_only_quit() {
        let mut app = test_app(false);
        app.start().unwrap();
        app.controller.handle_event(
            EventEnvelope::new(1, TerminalEvent::DeleteSuccess),
            &mut app.host,
        );

        update(&mut app, AppMessage::Noop);
        assert!(!app.should_quit);

        update(&mut app, AppMessage::Edit(FieldEdit::Insert('x')));
        assert!(app.should_quit);
        assert_eq!(app.controller.surface().nickname.text(), "");
    }

    #[tokio::test]
    async fn test_quit_leaves_no_result() {
        let mut app = test_app(true);
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
        assert!(!app.host.username_created());
    }
}
