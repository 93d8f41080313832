//! 终端事件
//!
//! 事件是一次性的：每个事件携带单调递增的序号，消费方按序号去重，
//! 因此即使底层流在重新订阅后重复投递，副作用也只执行一次。

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// 提交 / 删除 / 跳过 操作的结果事件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerminalEvent {
    SubmitSuccess,
    SubmitFailTaken,
    SubmitFailInvalid,
    DeleteSuccess,
    NetworkFailure,
    Skipped,
}

/// 带序号的事件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub seq: u64,
    pub event: TerminalEvent,
}

impl EventEnvelope {
    pub fn new(seq: u64, event: TerminalEvent) -> Self {
        Self { seq, event }
    }
}

/// 事件通道（供 view-model 实现使用）
///
/// 负责分配序号并广播；没有订阅者时事件直接丢弃。
pub struct EventChannel {
    sender: broadcast::Sender<EventEnvelope>,
    next_seq: AtomicU64,
}

impl EventChannel {
    /// 默认缓冲容量
    pub const DEFAULT_CAPACITY: usize = 16;

    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            next_seq: AtomicU64::new(1),
        }
    }

    /// 订阅事件流
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// 发出事件，返回分配的序号
    pub fn emit(&self, event: TerminalEvent) -> u64 {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        if self.sender.send(EventEnvelope::new(seq, event)).is_err() {
            log::debug!("No subscriber for terminal event {event:?} (seq {seq})");
        }
        seq
    }
}

impl Default for EventChannel {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
