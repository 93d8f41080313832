//! 操作按钮行

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use username_edit_core::i18n::t;
use username_edit_core::surface::ActionButton;

use crate::model::App;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let surface = app.controller.surface();
    let texts = t();
    let keys = &texts.hints.keys;

    let buttons = [
        (&surface.skip_button, keys.alt_k, texts.screen.skip),
        (&surface.delete_button, keys.alt_d, texts.screen.delete),
        (&surface.submit_button, keys.alt_s, texts.screen.submit),
        (&surface.done_button, keys.alt_s, texts.screen.done),
    ];

    let mut spans = Vec::new();
    for (button, key, label) in buttons {
        if !button.visible {
            continue;
        }
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(button_span(button, key, label));
    }

    frame.render_widget(Paragraph::new(Line::from(spans).right_aligned()), area);
}

fn button_span(button: &ActionButton, key: &str, label: &str) -> Span<'static> {
    let c = colors();

    if button.spinning {
        return Span::styled(
            format!(" {} ", t().screen.saving),
            Style::default()
                .fg(c.text(button.opacity))
                .add_modifier(Modifier::ITALIC),
        );
    }

    let style = if button.enabled {
        Style::default()
            .bg(c.primary)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.text(button.opacity))
    };
    Span::styled(format!(" {label} [{key}] "), style)
}
