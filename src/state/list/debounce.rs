//! Debounced search input driven by the event loop clock

use std::time::{Duration, Instant};

/// Default delay between the last keystroke and the search actually running
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Fire-once deadline timer. Polled by the owner; nothing runs in the background.
#[derive(Debug, Clone, Default)]
pub struct CancellableTimer {
    deadline: Option<Instant>,
}

impl CancellableTimer {
    /// Arm the timer, replacing any pending deadline
    pub fn start(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once, on the first poll at or after the deadline
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Search box text: what the user typed, and what the list is filtered by
#[derive(Debug, Clone)]
pub struct DebouncedInput {
    raw: String,
    committed: String,
    delay: Duration,
    timer: CancellableTimer,
}

impl Default for DebouncedInput {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl DebouncedInput {
    pub fn new(delay: Duration) -> Self {
        Self {
            raw: String::new(),
            committed: String::new(),
            delay,
            timer: CancellableTimer::default(),
        }
    }

    /// Text currently shown in the search box
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Text the list is currently filtered by
    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Record a keystroke; restarts the timer (last write wins)
    pub fn set(&mut self, value: String, now: Instant) {
        self.raw = value;
        self.timer.start(now, self.delay);
    }

    pub fn push_char(&mut self, c: char, now: Instant) {
        let mut value = self.raw.clone();
        value.push(c);
        self.set(value, now);
    }

    pub fn pop_char(&mut self, now: Instant) {
        let mut value = self.raw.clone();
        value.pop();
        self.set(value, now);
    }

    /// Commit the typed text if the timer has expired. Returns true when the
    /// committed text changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.timer.fire(now) {
            return false;
        }
        self.commit()
    }

    /// Commit immediately (e.g. on Enter)
    pub fn flush(&mut self) -> bool {
        self.timer.cancel();
        self.commit()
    }

    /// Clear both texts and cancel the timer
    pub fn clear(&mut self) {
        self.timer.cancel();
        self.raw.clear();
        self.committed.clear();
    }

    /// Drop any pending commit; used when the owning page goes away
    pub fn teardown(&mut self) {
        self.timer.cancel();
    }

    fn commit(&mut self) -> bool {
        if self.committed == self.raw {
            return false;
        }
        self.committed = self.raw.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod cancellable_timer {
        use super::*;

        #[test]
        fn test_fires_once_after_deadline() {
            let start = Instant::now();
            let mut timer = CancellableTimer::default();
            timer.start(start, Duration::from_millis(300));
            assert!(!timer.fire(start + Duration::from_millis(299)));
            assert!(timer.fire(start + Duration::from_millis(300)));
            assert!(!timer.fire(start + Duration::from_millis(900)));
        }

        #[test]
        fn test_cancel_prevents_firing() {
            let start = Instant::now();
            let mut timer = CancellableTimer::default();
            timer.start(start, Duration::from_millis(10));
            timer.cancel();
            assert!(!timer.is_pending());
            assert!(!timer.fire(start + Duration::from_secs(1)));
        }
    }

    mod debounced_input {
        use super::*;

        #[test]
        fn test_commits_after_delay() {
            let start = Instant::now();
            let mut input = DebouncedInput::default();
            input.set("nel".to_string(), start);
            assert_eq!(input.raw(), "nel");
            assert_eq!(input.committed(), "");
            assert!(!input.poll(start + Duration::from_millis(100)));
            assert!(input.poll(start + Duration::from_millis(300)));
            assert_eq!(input.committed(), "nel");
        }

        #[test]
        fn test_keystroke_restarts_timer() {
            let start = Instant::now();
            let mut input = DebouncedInput::default();
            input.push_char('a', start);
            input.push_char('b', start + Duration::from_millis(200));
            // 300ms after the first keystroke, but only 100ms after the last
            assert!(!input.poll(start + Duration::from_millis(300)));
            assert!(input.poll(start + Duration::from_millis(500)));
            assert_eq!(input.committed(), "ab");
        }

        #[test]
        fn test_teardown_cancels_pending_commit() {
            let start = Instant::now();
            let mut input = DebouncedInput::default();
            input.set("gado".to_string(), start);
            input.teardown();
            assert!(!input.poll(start + Duration::from_secs(5)));
            assert_eq!(input.committed(), "");
        }

        #[test]
        fn test_flush_commits_immediately() {
            let start = Instant::now();
            let mut input = DebouncedInput::default();
            input.set("boi".to_string(), start);
            assert!(input.flush());
            assert_eq!(input.committed(), "boi");
            assert!(!input.is_pending());
            assert!(!input.flush());
        }

        #[test]
        fn test_unchanged_commit_reports_false() {
            let start = Instant::now();
            let mut input = DebouncedInput::default();
            input.push_char('x', start);
            input.pop_char(start);
            assert!(!input.poll(start + Duration::from_secs(1)));
        }
    }
}
