//! 应用主循环
//!
//! loop {
//!     app.sync(now)                               // 取出 view-model 新状态，推进动画 / toast
//!     terminal.draw(|f| view::render(&app, f))    // 渲染 UI
//!     if app.should_quit { break }
//!     if let Some(event) = poll_event() {         // 等待输入，最长 50ms
//!         let msg = handle_event(event, &app);
//!         update::update(&mut app, msg)
//!     }
//! }
//!
//! 控制器返回的契约错误会直接结束循环，由 main 恢复终端后报告。

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 轮询间隔：同时决定错误行动画的帧率
const TICK: Duration = Duration::from_millis(50);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    app.start()?;

    loop {
        app.sync(Instant::now())?;

        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    app.controller.stop();
    Ok(())
}
