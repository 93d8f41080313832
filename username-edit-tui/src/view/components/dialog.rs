//! 浮层：说明对话框与注册流程的进度卡片

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use username_edit_core::i18n::t;
use username_edit_core::surface::Dialog;

use crate::model::App;
use crate::view::theme::colors;

/// 渲染浮层（如果有）
pub fn render(app: &App, frame: &mut Frame) {
    let surface = app.controller.surface();

    if surface.progress_card_visible {
        render_progress_card(frame);
    }
    match surface.dialog {
        Some(Dialog::LearnMore) => render_learn_more(frame),
        None => {}
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_learn_more(frame: &mut Frame) {
    let texts = t();
    let c = colors();
    let area = centered_rect(56, 11, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.primary))
        .style(Style::default().bg(c.bg).fg(c.fg));

    let lines = vec![
        Line::styled("#", Style::default().add_modifier(Modifier::BOLD)).centered(),
        Line::styled(
            texts.learn_more.title,
            Style::default().add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::from(""),
        Line::from(texts.learn_more.message),
        Line::from(""),
        Line::styled(
            format!("[ {} ]", texts.common.ok),
            Style::default().fg(c.primary).add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Right),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_progress_card(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(28, 5, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border))
        .style(Style::default().bg(c.bg).fg(c.fg));
    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(t().screen.saving).centered()])
        .block(block);
    frame.render_widget(paragraph, area);
}
