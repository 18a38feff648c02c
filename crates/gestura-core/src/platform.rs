//! Platform abstraction for time.
//!
//! Gesture timestamps and deferred callbacks are expressed in milliseconds
//! from an arbitrary, fixed origin, the same way native input stacks report
//! uptime-based event times.

use std::cell::Cell;
use web_time::Instant;

/// Provides timing information for the scheduler and platform shims.
pub trait Clock {
    /// Milliseconds elapsed since this clock's origin.
    fn now_millis(&self) -> u64;
}

/// Wall clock backed by a monotonic `Instant`.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}
