//! Injectable time sources.
//!
//! Animation state machines consume absolute timestamps rather than deltas,
//! matching the host animation-frame callback domain. A `Clock` produces
//! those timestamps; hosts use `SystemClock`, tests use `ManualClock`.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// A point in time, in milliseconds since the clock's origin.
pub type Timestamp = f64;

/// Source of monotonically non-decreasing timestamps.
pub trait Clock {
    /// Current time in milliseconds since the clock's origin.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time source with its origin at construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose timestamps start at zero now.
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
    fn now(&self) -> Timestamp {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Manually advanced clock for tests and headless hosts.
///
/// Clones share the same underlying time, so a test can hand the clock to a
/// driver loop and advance it from outside.
///
/// # Example
/// ```
/// # use glide_core::clock::{Clock, ManualClock};
/// let clock = ManualClock::new();
/// clock.advance(16.0);
/// assert_eq!(clock.now(), 16.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Timestamp>>,
}

impl ManualClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current time in milliseconds.
    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }

    /// Advance the current time by `delta_ms` milliseconds.
    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}
