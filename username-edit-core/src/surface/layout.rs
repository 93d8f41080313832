//! 布局过渡
//!
//! 错误行出现 / 消失会改变布局高度，这一变化以动画呈现；
//! 但颜色与可见性的切换必须原子地完成，不能带动画。
//! `RenderBatch` 是一个作用域：进入时关闭动画，退出（drop）时恢复，
//! 若作用域内错误行可见性发生了变化，恰好排入一次布局动画。

use std::ops::{Deref, DerefMut};

use super::Surface;

/// 布局过渡模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionMode {
    #[default]
    Animated,
    Static,
}

/// 待播放的布局动画
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAnimation {
    ErrorLineShown,
    ErrorLineHidden,
}

/// 布局过渡状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutTransition {
    mode: TransitionMode,
    pending: Option<LayoutAnimation>,
}

impl LayoutTransition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    pub fn pending(&self) -> Option<LayoutAnimation> {
        self.pending
    }

    /// 取出待播放的动画（由渲染层消费）
    pub fn take_pending(&mut self) -> Option<LayoutAnimation> {
        self.pending.take()
    }

    fn queue(&mut self, animation: LayoutAnimation) {
        if self.mode == TransitionMode::Animated {
            self.pending = Some(animation);
        }
    }
}

/// 批量渲染作用域
pub struct RenderBatch<'a> {
    surface: &'a mut Surface,
    error_was_visible: bool,
    previous_mode: TransitionMode,
}

impl<'a> RenderBatch<'a> {
    pub(super) fn begin(surface: &'a mut Surface) -> Self {
        let previous_mode = surface.layout.mode;
        let error_was_visible = surface.error.visible;
        surface.layout.mode = TransitionMode::Static;
        Self {
            surface,
            error_was_visible,
            previous_mode,
        }
    }
}

impl Deref for RenderBatch<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        self.surface
    }
}

impl DerefMut for RenderBatch<'_> {
    fn deref_mut(&mut self) -> &mut Surface {
        self.surface
    }
}

impl Drop for RenderBatch<'_> {
    fn drop(&mut self) {
        self.surface.layout.mode = self.previous_mode;

        let visible = self.surface.error.visible;
        if visible != self.error_was_visible {
            self.surface.layout.queue(if visible {
                LayoutAnimation::ErrorLineShown
            } else {
                LayoutAnimation::ErrorLineHidden
            });
        }
    }
}
