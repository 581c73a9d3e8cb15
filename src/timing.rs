//! Debounce and throttle primitives
//!
//! Timers are plain values owned by whoever rate-limits: a [`Debouncer`]
//! holds at most one pending payload with a deadline, a [`Throttle`] holds
//! the start of its current window. Callers feed them the current time from
//! a [`Clock`] and act on what they return.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    payload: T,
    deadline: Instant,
}

/// Coalesces bursts of calls into one, delivered after a quiet window
///
/// Each [`schedule`](Debouncer::schedule) replaces the pending payload and
/// pushes the deadline out; only the latest payload is ever delivered.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Replace any pending payload and restart the quiet window
    pub fn schedule(&mut self, payload: T, now: Instant) {
        self.pending = Some(Pending {
            payload,
            deadline: now + self.wait,
        });
    }

    /// Deliver the payload if its quiet window has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if due {
            self.pending.take().map(|p| p.payload)
        } else {
            None
        }
    }

    /// Deliver the pending payload regardless of the deadline
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    /// Drop the pending payload without delivering it
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.payload)
    }
}

/// Leading-edge rate limiter: at most one execution per window
///
/// The first call of a window runs immediately with its own arguments;
/// every other call until the window closes is dropped.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    opened_at: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            opened_at: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns true when the caller may run now, opening a new window
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        match self.opened_at {
            Some(opened) if now.saturating_duration_since(opened) < self.window => false,
            _ => {
                self.opened_at = Some(now);
                true
            }
        }
    }

    /// Run `f` if the throttle allows it
    pub fn run<R>(&mut self, now: Instant, f: impl FnOnce() -> R) -> Option<R> {
        if self.try_acquire(now) {
            Some(f())
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.opened_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debouncer_delivers_latest_after_quiet_window() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        for text in ["s", "so", "soi", "soil", "soil "] {
            debouncer.schedule(text.to_string(), clock.now());
            clock.advance_ms(50);
            assert_eq!(debouncer.poll(clock.now()), None);
        }

        clock.advance_ms(299);
        assert_eq!(debouncer.poll(clock.now()), Some("soil ".to_string()));
        assert_eq!(debouncer.poll(clock.now()), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_debouncer_restarts_window_on_each_call() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(1, clock.now());
        clock.advance_ms(250);
        debouncer.schedule(2, clock.now());
        clock.advance_ms(250);
        assert_eq!(debouncer.poll(clock.now()), None);
        clock.advance_ms(50);
        assert_eq!(debouncer.poll(clock.now()), Some(2));
    }

    #[test]
    fn test_debouncer_flush_and_cancel() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule("a", clock.now());
        assert_eq!(debouncer.peek(), Some(&"a"));
        assert_eq!(debouncer.flush(), Some("a"));
        assert_eq!(debouncer.flush(), None);

        debouncer.schedule("b", clock.now());
        assert!(debouncer.cancel());
        clock.advance_ms(1000);
        assert_eq!(debouncer.poll(clock.now()), None);
        assert!(!debouncer.cancel());
    }

    #[test]
    fn test_throttle_allows_one_call_per_window() {
        let clock = ManualClock::new();
        let mut throttle = Throttle::new(Duration::from_millis(100));

        assert!(throttle.try_acquire(clock.now()));
        clock.advance_ms(40);
        assert!(!throttle.try_acquire(clock.now()));
        clock.advance_ms(59);
        assert!(!throttle.try_acquire(clock.now()));
        clock.advance_ms(1);
        assert!(throttle.try_acquire(clock.now()));
    }

    #[test]
    fn test_throttle_run_uses_arguments_of_window_opener() {
        let clock = ManualClock::new();
        let mut throttle = Throttle::new(Duration::from_millis(100));
        let mut seen = Vec::new();

        for y in [10, 20, 30] {
            throttle.run(clock.now(), || seen.push(y));
            clock.advance_ms(30);
        }
        clock.advance_ms(100);
        throttle.run(clock.now(), || seen.push(40));

        assert_eq!(seen, vec![10, 40]);
    }

    #[test]
    fn test_throttle_reset() {
        let clock = ManualClock::new();
        let mut throttle = Throttle::new(Duration::from_millis(100));
        assert!(throttle.try_acquire(clock.now()));
        throttle.reset();
        assert!(throttle.try_acquire(clock.now()));
    }
}
