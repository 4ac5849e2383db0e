//! Millisecond clock
//!
//! Single writer (the tick interrupt), many readers. All timing decisions
//! compare snapshots with wrapping subtraction, so the counter rolling over
//! after ~49 days does not disturb a running session.

use portable_atomic::{AtomicU32, Ordering};

/// Millisecond timestamp
pub type Millis = u32;

/// Elapsed milliseconds from `since` to `now`, wraparound-safe
#[inline]
pub fn elapsed(now: Millis, since: Millis) -> u32 {
    now.wrapping_sub(since)
}

/// Monotonic millisecond counter
#[derive(Debug)]
pub struct Clock {
    ms: AtomicU32,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Create a clock at zero
    pub const fn new() -> Self {
        Self {
            ms: AtomicU32::new(0),
        }
    }

    /// Advance by one millisecond (tick interrupt)
    #[inline]
    pub fn tick(&self) {
        self.ms.fetch_add(1, Ordering::Relaxed);
    }

    /// Current count
    #[inline]
    pub fn now(&self) -> Millis {
        self.ms.load(Ordering::Relaxed)
    }
}
