//! 状态栏：快捷键提示，或当前 toast

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use username_edit_core::i18n::t;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(toast) = &app.host.toast {
        let c = colors();
        let paragraph = Paragraph::new(format!(" {}", toast.text))
            .style(Style::default().bg(c.toast_bg).fg(c.fg));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut spans = Vec::new();
    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::statusbar()),
        area,
    );
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let surface = app.controller.surface();

    if surface.dialog.is_some() {
        return vec![(keys.enter, actions.close), (keys.esc, actions.close)];
    }

    let mut hints = vec![(keys.tab, actions.switch_field)];
    if surface.submit_button.visible || surface.done_button.visible {
        hints.push((keys.alt_s, actions.submit));
    }
    if surface.delete_button.visible {
        hints.push((keys.alt_d, actions.delete));
    }
    if surface.skip_button.visible {
        hints.push((keys.alt_k, actions.skip));
    }
    hints.push((keys.f1, actions.learn_more));
    if surface.toolbar.back_navigation {
        hints.push((keys.esc, actions.back));
    }
    hints.push((keys.ctrl_c, texts.common.quit));

    hints
}
