//! Single-slot notification with auto-dismiss

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    shown_at: Instant,
}

/// Holds at most one notice. Showing a new one replaces the old one and restarts the timer.
#[derive(Debug)]
pub struct NoticeSlot {
    current: Option<Notice>,
    duration: Duration,
}

impl NoticeSlot {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn show(&mut self, text: impl Into<String>, kind: NoticeKind, now: Instant) {
        self.current = Some(Notice {
            text: text.into(),
            kind,
            shown_at: now,
        });
    }

    /// The visible notice at `now`, if any
    pub fn visible(&self, now: Instant) -> Option<&Notice> {
        self.current
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.shown_at) < self.duration)
    }

    /// Time until the visible notice disappears
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.visible(now)
            .map(|n| self.duration.saturating_sub(now.saturating_duration_since(n.shown_at)))
    }

    /// Drop the notice once its window has passed
    pub fn expire(&mut self, now: Instant) {
        if self.visible(now).is_none() {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: Duration = Duration::from_secs(5);

    #[test]
    fn test_notice_visible_within_window() {
        let t0 = Instant::now();
        let mut slot = NoticeSlot::new(FIVE);
        slot.show("Signed up", NoticeKind::Success, t0);
        assert_eq!(slot.visible(t0).unwrap().text, "Signed up");
        assert!(slot.visible(t0 + Duration::from_millis(4999)).is_some());
        assert!(slot.visible(t0 + FIVE).is_none());
    }

    #[test]
    fn test_second_notice_replaces_first_and_restarts_timer() {
        let t0 = Instant::now();
        let mut slot = NoticeSlot::new(FIVE);
        slot.show("first", NoticeKind::Success, t0);
        let t1 = t0 + Duration::from_secs(3);
        slot.show("second", NoticeKind::Error, t1);

        let shown = slot.visible(t1).unwrap();
        assert_eq!(shown.text, "second");
        assert_eq!(shown.kind, NoticeKind::Error);

        // The first notice's deadline no longer applies
        assert!(slot.visible(t0 + Duration::from_secs(6)).is_some());
        assert!(slot.visible(t1 + FIVE).is_none());
    }

    #[test]
    fn test_remaining_counts_down() {
        let t0 = Instant::now();
        let mut slot = NoticeSlot::new(FIVE);
        assert_eq!(slot.remaining(t0), None);
        slot.show("x", NoticeKind::Success, t0);
        assert_eq!(slot.remaining(t0 + Duration::from_secs(2)), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_expire_clears_slot() {
        let t0 = Instant::now();
        let mut slot = NoticeSlot::new(FIVE);
        slot.show("x", NoticeKind::Error, t0);
        slot.expire(t0 + Duration::from_secs(1));
        assert!(slot.visible(t0 + Duration::from_secs(1)).is_some());
        slot.expire(t0 + Duration::from_secs(10));
        assert!(slot.current.is_none());
    }
}
