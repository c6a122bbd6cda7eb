//! Per-frame timing bookkeeping for real-time hosts.

use crate::clock::{Clock, Timestamp};

/// Tracks timing information for a host's frame loop.
///
/// Call [`FrameTimer::update`] once per frame with the host clock; the timer
/// records the frame timestamp, a hitch-capped delta, and running counters.
/// The adapters themselves only need the timestamp (`now()`), the rest is for
/// hosts that do their own per-frame work.
///
/// # Example
/// ```
/// # use glide_core::{FrameTimer, ManualClock};
/// let clock = ManualClock::new();
/// let mut timer = FrameTimer::new();
/// timer.update(&clock);
/// clock.advance(16.0);
/// timer.update(&clock);
/// assert_eq!(timer.delta_ms(), 16.0);
/// assert_eq!(timer.frame_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FrameTimer {
    /// Timestamp of the most recent frame.
    now: Timestamp,
    /// Timestamp of the first frame, `None` before the first update.
    start: Option<Timestamp>,
    /// Time since the previous frame, capped at `max_delta`.
    delta: f64,
    /// Total number of frames observed.
    frame_count: u64,
    /// Cap on reported delta, guards against long hitches (default 100ms).
    max_delta: f64,
}

impl FrameTimer {
    /// Create a new timer with a 100ms delta cap.
    pub fn new() -> Self {
        Self {
            now: 0.0,
            start: None,
            delta: 0.0,
            frame_count: 0,
            max_delta: 100.0,
        }
    }

    /// Record a new frame from the given clock.
    pub fn update(&mut self, clock: &impl Clock) {
        let now = clock.now();
        match self.start {
            None => {
                self.start = Some(now);
                self.delta = 0.0;
            }
            Some(_) => {
                let raw = (now - self.now).max(0.0);
                if raw > self.max_delta {
                    tracing::trace!(
                        raw_delta_ms = raw,
                        cap_ms = self.max_delta,
                        "frame hitch capped"
                    );
                }
                self.delta = raw.min(self.max_delta);
            }
        }
        self.now = now;
        self.frame_count += 1;
    }

    /// Timestamp of the most recent frame.
    #[inline]
    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// Capped time since the previous frame, in milliseconds.
    #[inline]
    pub fn delta_ms(&self) -> f64 {
        self.delta
    }

    /// Uncapped time since the first frame, in milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        match self.start {
            Some(start) => self.now - start,
            None => 0.0,
        }
    }

    /// Total number of frames observed.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Current delta cap in milliseconds.
    #[inline]
    pub fn max_delta_ms(&self) -> f64 {
        self.max_delta
    }

    /// Set the delta cap in milliseconds.
    pub fn set_max_delta_ms(&mut self, max_delta: f64) {
        self.max_delta = max_delta.max(0.0);
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
