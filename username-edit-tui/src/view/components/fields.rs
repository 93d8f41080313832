//! 昵称 / 数字后缀输入框与内联错误行

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;
use username_edit_core::i18n::t;
use username_edit_core::surface::{Accent, TextField};
use username_edit_core::FieldId;

use crate::model::App;
use crate::view::theme::colors;

/// 进行中指示
const PROGRESS_MARK: &str = " ⋯ ";

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let surface = app.controller.surface();
    let texts = t();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(62),
            Constraint::Length(1),
            Constraint::Min(8),
        ])
        .split(area);

    render_field(
        frame,
        columns[0],
        &surface.nickname,
        texts.screen.nickname_label,
        surface.focus == FieldId::Nickname && surface.dialog.is_none(),
        surface.hint_accent,
        false,
    );
    frame.render_widget(
        Paragraph::new("\n.").style(Style::default().fg(colors().muted)),
        columns[1],
    );
    render_field(
        frame,
        columns[2],
        &surface.discriminator,
        texts.screen.discriminator_label,
        surface.focus == FieldId::Discriminator && surface.dialog.is_none(),
        surface.hint_accent,
        surface.suffix_progress_visible,
    );
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &TextField,
    label: &str,
    focused: bool,
    hint_accent: Accent,
    in_progress: bool,
) {
    let c = colors();

    // 错误主题下两个框都用错误色；否则只有焦点框高亮
    let border_color = if focused || hint_accent == Accent::Error {
        c.accent(hint_accent)
    } else {
        c.border
    };
    let mut border_style = Style::default().fg(border_color);
    if focused {
        border_style = border_style.add_modifier(Modifier::BOLD);
    }

    let mut block = Block::default()
        .title(Span::styled(
            format!(" {label} "),
            Style::default().fg(c.accent(hint_accent)),
        ))
        .borders(Borders::ALL)
        .border_style(border_style);
    if in_progress {
        block = block.title_bottom(Line::from(PROGRESS_MARK).right_aligned());
    }

    let text_color = if field.enabled { c.fg } else { c.muted };
    let inner = block.inner(area);
    frame.render_widget(
        Paragraph::new(field.text()).style(Style::default().fg(text_color)).block(block),
        area,
    );

    if focused && field.enabled {
        let offset = cursor_offset(field);
        let x = inner.x.saturating_add(offset).min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

/// 光标前文本的显示宽度
fn cursor_offset(field: &TextField) -> u16 {
    let width: usize = field
        .text()
        .chars()
        .take(field.cursor())
        .map(|ch| ch.width().unwrap_or(0))
        .sum();
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// 内联错误行；刚出现时逐字展开
pub fn render_error(app: &App, frame: &mut Frame, area: Rect, now: Instant) {
    if area.height == 0 {
        return;
    }
    let error = &app.controller.surface().error;
    let Some(text) = error.text.as_deref().filter(|_| error.visible) else {
        return;
    };

    let total = text.chars().count();
    let shown = app
        .error_animation
        .map_or(total, |animation| animation.revealed_chars(total, now));
    let visible: String = text.chars().take(shown).collect();

    frame.render_widget(
        Paragraph::new(visible).style(Style::default().fg(colors().error)),
        area,
    );
}
