//! 页面组件

pub mod buttons;
pub mod dialog;
pub mod fields;
pub mod statusbar;
