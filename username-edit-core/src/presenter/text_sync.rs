//! Text sync bridge
//!
//! Every text mutation, user or programmatic, produces a `TextChange` that goes
//! through [`TextSyncBridge::route`]. A per-field suppression flag is raised for
//! the duration of a programmatic write, so those changes never reach the
//! view-model; user keystrokes pass through exactly once.

use crate::surface::{FieldId, Surface, TextChange, TextField};
use crate::types::UsernameInputState;

/// Per-field "programmatic write in progress" flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SuppressionFlags {
    nickname: bool,
    discriminator: bool,
}

impl SuppressionFlags {
    fn get(self, id: FieldId) -> bool {
        match id {
            FieldId::Nickname => self.nickname,
            FieldId::Discriminator => self.discriminator,
        }
    }

    fn set(&mut self, id: FieldId, value: bool) {
        match id {
            FieldId::Nickname => self.nickname = value,
            FieldId::Discriminator => self.discriminator = value,
        }
    }
}

#[derive(Debug, Default)]
pub struct TextSyncBridge {
    suppressed: SuppressionFlags,
}

impl TextSyncBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_suppressed(&self, id: FieldId) -> bool {
        self.suppressed.get(id)
    }

    /// Edit-notification path: returns the change only when it should reach the view-model.
    pub fn route(&self, change: TextChange) -> Option<TextChange> {
        if self.is_suppressed(change.field) {
            log::debug!("Suppressed programmatic change on {:?}", change.field);
            None
        } else {
            Some(change)
        }
    }

    /// Bring both fields in line with authoritative state.
    pub fn present(&mut self, surface: &mut Surface, state: &UsernameInputState) {
        self.write(&mut surface.nickname, &state.nickname);
        self.write(&mut surface.discriminator, &state.discriminator);
    }

    fn write(&mut self, field: &mut TextField, value: &str) {
        // Equal text: leave the widget alone so the caret does not jump.
        if field.text() == value {
            return;
        }

        let id = field.id();
        self.suppressed.set(id, true);
        if let Some(change) = field.replace_text(value) {
            let forwarded = self.route(change);
            debug_assert!(forwarded.is_none());
        }
        field.move_cursor_to_end();
        self.suppressed.set(id, false);
    }
}
