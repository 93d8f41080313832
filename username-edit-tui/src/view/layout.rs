//! 主布局

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use username_edit_core::i18n::t;

use super::components;
use super::theme::{colors, Styles};
use crate::model::App;

/// 内容列的最大宽度
const BODY_WIDTH: u16 = 64;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let now = Instant::now();
    let surface = app.controller.surface();
    let c = colors();

    frame.render_widget(
        Block::default().style(Style::default().bg(c.bg).fg(c.fg)),
        frame.area(),
    );

    // 三层布局：工具栏 + 内容 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_toolbar(app, frame, main_layout[0]);

    let body = centered_column(main_layout[1], BODY_WIDTH);
    let error_rows = u16::from(
        surface.error.visible
            || app
                .error_animation
                .is_some_and(|animation| animation.keeps_row(now)),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),          // 摘要
            Constraint::Length(1),          // 间隔
            Constraint::Length(3),          // 输入框
            Constraint::Length(error_rows), // 错误行
            Constraint::Length(3),          // 说明
            Constraint::Length(1),          // 按钮
            Constraint::Min(0),
        ])
        .split(body);

    render_summary(app, frame, rows[0]);
    components::fields::render(app, frame, rows[2]);
    components::fields::render_error(app, frame, rows[3], now);
    render_description(frame, rows[4]);
    components::buttons::render(app, frame, rows[5]);

    components::statusbar::render(app, frame, main_layout[2]);

    // 浮层（最上层）
    components::dialog::render(app, frame);
}

/// 水平居中的内容列
fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y + 1, width, area.height.saturating_sub(1))
}

fn render_toolbar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let toolbar = &app.controller.surface().toolbar;

    let mut spans = Vec::new();
    if toolbar.back_navigation {
        spans.push(Span::raw(" ← "));
    } else {
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(toolbar.title.as_str()));

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(c.primary).fg(c.selected_fg));
    frame.render_widget(paragraph, area);
}

fn render_summary(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let summary = &app.controller.surface().summary;
    let paragraph = Paragraph::new(summary.text.as_str())
        .style(Styles::title().fg(c.text(summary.opacity)));
    frame.render_widget(paragraph, area);
}

fn render_description(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let line = Line::from(vec![
        Span::styled(texts.screen.description, Style::default().fg(c.muted)),
        Span::raw(" "),
        Span::styled(
            format!("{} ({})", texts.screen.learn_more_link, texts.hints.keys.f1),
            Style::default().fg(c.primary),
        ),
    ]);
    let paragraph = Paragraph::new(line).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
