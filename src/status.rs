use std::collections::VecDeque;

use web_time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Fallback,
}

/// A transient, non-blocking message shown near the bottom of the
/// window ("showing bundled samples", "opening mail client").
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    at: Instant,
    ttl_ms: u128,
}

impl Notice {
    fn expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.at).as_millis() > self.ttl_ms
    }
}

/// Small FIFO of active notices. Nothing here is an error surface;
/// failures are masked elsewhere and at most mentioned in passing.
#[derive(Default)]
pub struct NoticeBoard {
    q: VecDeque<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>, ttl_ms: u128) {
        self.q.push_back(Notice {
            kind,
            text: text.into(),
            at: Instant::now(),
            ttl_ms,
        });
    }

    pub fn push_info(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Info, text, 3000);
    }

    pub fn push_fallback(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Fallback, text, 5000);
    }

    pub fn sweep(&mut self) {
        self.sweep_at(Instant::now());
    }

    // Takes an explicit now for deterministic tests.
    pub fn sweep_at(&mut self, now: Instant) {
        self.q.retain(|n| !n.expired_at(now));
    }

    /// Most recent still-active notice.
    pub fn latest(&self) -> Option<&Notice> {
        self.q.back()
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    #[test]
    fn notices_expire_by_ttl() {
        let mut board = NoticeBoard::new();
        board.push(NoticeKind::Info, "short", 100);
        board.push(NoticeKind::Fallback, "long", 400);
        assert_eq!(board.len(), 2);

        board.sweep_at(Instant::now() + Duration::from_millis(200));
        assert_eq!(board.len(), 1);
        assert_eq!(board.latest().unwrap().text, "long");

        board.sweep_at(Instant::now() + Duration::from_millis(600));
        assert!(board.is_empty());
    }
}
