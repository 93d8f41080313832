//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use username_edit_core::surface::FieldEdit;

use crate::event::keymap::DefaultKeymap;
use crate::message::AppMessage;
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 窗口大小变化由下一轮绘制处理
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，忽略 Release / Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 对话框打开时只响应关闭
    if app.controller.surface().dialog.is_some() {
        return if DefaultKeymap::CONFIRM.matches(&key) || DefaultKeymap::BACK.matches(&key) {
            AppMessage::CloseDialog
        } else {
            AppMessage::Noop
        };
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::LEARN_MORE.matches(&key) {
        return AppMessage::ShowLearnMore;
    }
    if DefaultKeymap::ACTION_SUBMIT.matches(&key) {
        return AppMessage::Submit;
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Delete;
    }
    if DefaultKeymap::ACTION_SKIP.matches(&key) {
        return AppMessage::Skip;
    }
    if DefaultKeymap::NEXT_FIELD.matches(&key) || DefaultKeymap::PREV_FIELD.matches(&key) {
        return AppMessage::SwitchField;
    }
    if DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Confirm;
    }

    handle_field_keys(key)
}

/// 输入框内的编辑键
fn handle_field_keys(key: KeyEvent) -> AppMessage {
    let edit = match key.code {
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            FieldEdit::Insert(c)
        }
        KeyCode::Backspace => FieldEdit::Backspace,
        KeyCode::Delete => FieldEdit::Delete,
        KeyCode::Left => FieldEdit::CursorLeft,
        KeyCode::Right => FieldEdit::CursorRight,
        KeyCode::Home => FieldEdit::Home,
        KeyCode::End => FieldEdit::End,
        _ => return AppMessage::Noop,
    };
    AppMessage::Edit(edit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_field_keys() {
        assert_eq!(
            handle_field_keys(key(KeyCode::Char('a'))),
            AppMessage::Edit(FieldEdit::Insert('a'))
        );
        assert_eq!(
            handle_field_keys(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            AppMessage::Edit(FieldEdit::Insert('A'))
        );
        assert_eq!(
            handle_field_keys(key(KeyCode::Backspace)),
            AppMessage::Edit(FieldEdit::Backspace)
        );
        assert_eq!(
            handle_field_keys(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            AppMessage::Noop
        );
    }

    #[test]
    fn test_action_bindings() {
        let alt = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT);
        assert!(DefaultKeymap::ACTION_SUBMIT.matches(&alt('s')));
        assert!(DefaultKeymap::ACTION_DELETE.matches(&alt('d')));
        assert!(DefaultKeymap::ACTION_SKIP.matches(&alt('k')));
        assert!(!DefaultKeymap::ACTION_SUBMIT.matches(&key(KeyCode::Char('s'))));
    }
}
