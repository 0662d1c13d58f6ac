//! Time source for design ids and export filenames.
//!
//! Both are epoch milliseconds. Within one session the values handed out are
//! strictly increasing, so two saves in the same millisecond still get
//! distinct ids.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Source of epoch-millisecond timestamps.
pub trait Clock {
    /// Next timestamp. Must be strictly greater than any previous value
    /// returned by the same clock.
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`, bumped by one millisecond when the
/// wall clock has not advanced since the last call.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        let wall = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = wall.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Deterministic clock for tests: starts at a fixed instant and advances by
/// `step` on every call.
#[derive(Debug)]
pub struct ManualClock {
    next: AtomicI64,
    step: i64,
}

impl ManualClock {
    pub fn new(start: i64) -> Self {
        Self::with_step(start, 1)
    }

    pub fn with_step(start: i64, step: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
            step: step.max(1),
        }
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.next.fetch_add(self.step, Ordering::Relaxed)
    }
}
