//! 单行输入框

use serde::{Deserialize, Serialize};

use super::Accent;

/// 输入框标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    Nickname,
    Discriminator,
}

impl FieldId {
    /// 切换到另一个输入框
    #[must_use]
    pub fn toggle(self) -> FieldId {
        match self {
            FieldId::Nickname => FieldId::Discriminator,
            FieldId::Discriminator => FieldId::Nickname,
        }
    }
}

/// 用户对输入框的一次编辑操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    Home,
    End,
}

/// 文本变化通知（对应输入框的 text watcher）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    pub field: FieldId,
    pub text: String,
}

/// 输入框
///
/// 光标以字符（而非字节）为单位。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    id: FieldId,
    text: String,
    cursor: usize,
    pub enabled: bool,
    /// 光标颜色
    pub accent: Accent,
}

impl TextField {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            text: String::new(),
            cursor: 0,
            enabled: true,
            accent: Accent::Primary,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 光标位置（字符索引）
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// 整体替换文本，光标回到开头。文本有变化时返回变化通知。
    pub fn replace_text(&mut self, text: &str) -> Option<TextChange> {
        if self.text == text {
            return None;
        }
        self.text = text.to_string();
        self.cursor = 0;
        Some(self.change())
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// 应用一次编辑；文本有变化时返回变化通知
    pub fn apply(&mut self, edit: FieldEdit) -> Option<TextChange> {
        match edit {
            FieldEdit::Insert(ch) => {
                let at = self.byte_index(self.cursor);
                self.text.insert(at, ch);
                self.cursor += 1;
                Some(self.change())
            }
            FieldEdit::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.text.remove(at);
                Some(self.change())
            }
            FieldEdit::Delete => {
                if self.cursor >= self.char_count() {
                    return None;
                }
                let at = self.byte_index(self.cursor);
                self.text.remove(at);
                Some(self.change())
            }
            FieldEdit::CursorLeft => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            FieldEdit::CursorRight => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                None
            }
            FieldEdit::Home => {
                self.cursor = 0;
                None
            }
            FieldEdit::End => {
                self.move_cursor_to_end();
                None
            }
        }
    }

    fn change(&self) -> TextChange {
        TextChange {
            field: self.id,
            text: self.text.clone(),
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}
