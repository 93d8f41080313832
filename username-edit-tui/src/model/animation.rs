//! 错误行布局动画
//!
//! 控制器在一次批量渲染后至多排入一个布局动画；这里记录开始时间，
//! 渲染层据此逐步展开或收起错误行。

use std::time::{Duration, Instant};

use username_edit_core::surface::LayoutAnimation;

/// 动画时长
pub const ERROR_LINE_ANIMATION: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLineAnimation {
    pub kind: LayoutAnimation,
    pub started: Instant,
}

impl ErrorLineAnimation {
    pub fn new(kind: LayoutAnimation, started: Instant) -> Self {
        Self { kind, started }
    }

    /// 进度 0.0 ..= 1.0
    pub fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / ERROR_LINE_ANIMATION.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// 错误行此刻是否仍占据一行
    pub fn keeps_row(&self, now: Instant) -> bool {
        self.kind == LayoutAnimation::ErrorLineHidden && !self.is_finished(now)
    }

    /// 展开过程中显示的字符数
    pub fn revealed_chars(&self, total: usize, now: Instant) -> usize {
        match self.kind {
            LayoutAnimation::ErrorLineShown => {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let shown = (total as f64 * self.progress(now)).ceil() as usize;
                shown.min(total)
            }
            LayoutAnimation::ErrorLineHidden => 0,
        }
    }
}
