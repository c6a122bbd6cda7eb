//! Animated count-up state machine.
//!
//! `CountUp` interpolates a displayed integer from a start value to an end
//! value over a fixed duration with an easing curve, the way "counting up"
//! statistic widgets do. The machine is driven by absolute timestamps from an
//! injected clock: the host calls [`CountUp::tick`] once per frame for as
//! long as the machine reports that it still wants frames.
//!
//! # Example
//! ```
//! use glide_motion::CountUp;
//!
//! let mut counter = CountUp::new(100).duration(1000.0).suffix("%");
//!
//! // Host frame loop (timestamps in milliseconds):
//! counter.tick(0.0);
//! counter.tick(500.0);
//! assert_eq!(counter.count(), 93); // quartic ease-out is front-loaded
//!
//! counter.tick(1000.0);
//! assert!(counter.is_complete());
//! assert_eq!(counter.display_value(), "100%");
//! ```

use glide_core::Timestamp;

use crate::easing::Easing;

/// Animated integer counter with easing, delay, and restart-on-change.
///
/// Watched configuration (`start`, `end`, `duration`, `delay`, `enabled`,
/// `easing`) restarts the run from scratch when changed; the previous run's
/// elapsed time is discarded and its pending frames can never publish again.
/// The suffix only affects the formatted output and does not restart.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    // -- Configuration --
    start: i64,
    end: i64,
    /// Animation duration in milliseconds.
    duration: f64,
    /// Delay before the animation begins, in milliseconds.
    delay: f64,
    enabled: bool,
    suffix: String,
    easing: Easing,

    // -- Run state --
    /// Current displayed value.
    count: i64,
    complete: bool,
    /// Timestamp of the run's first tick, `None` until it fires.
    reference: Option<Timestamp>,
    /// Generation counter; bumped on every restart or cancel so state from a
    /// superseded run can never publish.
    run: u64,
    /// Whether the machine still wants frames.
    active: bool,
    /// Whether any run has published a value yet.
    published: bool,
}

impl CountUp {
    /// Create a counter animating from 0 to `end` over 1200ms with quartic
    /// ease-out.
    pub fn new(end: i64) -> Self {
        let mut counter = Self {
            start: 0,
            end,
            duration: 1200.0,
            delay: 0.0,
            enabled: true,
            suffix: String::new(),
            easing: Easing::QuartOut,
            count: 0,
            complete: false,
            reference: None,
            run: 0,
            active: false,
            published: false,
        };
        counter.restart();
        counter
    }

    // -- Builder-style configuration --

    /// Set the start value.
    pub fn start(mut self, start: i64) -> Self {
        self.set_start(start);
        self
    }

    /// Set the duration in milliseconds.
    pub fn duration(mut self, duration_ms: f64) -> Self {
        self.set_duration(duration_ms);
        self
    }

    /// Set the delay before the animation begins, in milliseconds.
    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.set_delay(delay_ms);
        self
    }

    /// Set whether the animation runs.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    /// Set the display suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.set_suffix(suffix);
        self
    }

    /// Set the easing function.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.set_easing(easing);
        self
    }

    // -- Watched configuration changes (each restarts the run) --

    /// Change the start value and restart.
    pub fn set_start(&mut self, start: i64) {
        self.start = start;
        self.restart();
    }

    /// Change the end value and restart.
    pub fn set_end(&mut self, end: i64) {
        self.end = end;
        self.restart();
    }

    /// Change the duration and restart. Negative durations are clamped to 0,
    /// which completes on the first tick.
    pub fn set_duration(&mut self, duration_ms: f64) {
        self.duration = duration_ms.max(0.0);
        self.restart();
    }

    /// Change the delay and restart. Negative delays are clamped to 0.
    pub fn set_delay(&mut self, delay_ms: f64) {
        self.delay = delay_ms.max(0.0);
        self.restart();
    }

    /// Enable or disable the animation and restart.
    ///
    /// Disabling freezes the output at the start value with the completion
    /// flag cleared, covering states such as an element not yet visible.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.restart();
    }

    /// Change the easing curve and restart.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
        self.restart();
    }

    /// Change the display suffix. Does not restart the run.
    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
    }

    // -- Output --

    /// Current displayed value.
    #[inline]
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Whether the current run has reached the end value.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Current value with the suffix appended.
    pub fn display_value(&self) -> String {
        format!("{}{}", self.count, self.suffix)
    }

    /// Whether the animation is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the machine wants another frame.
    #[inline]
    pub fn needs_frame(&self) -> bool {
        self.active
    }

    /// Generation counter of the current run. Bumped on every restart or
    /// cancel; a host caching per-run handles can use it to detect staleness.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.run
    }

    // -- Driving --

    /// Advance the state machine to the given timestamp.
    ///
    /// The first tick of a run records the reference time. Returns `true`
    /// while the machine wants further frames.
    pub fn tick(&mut self, now: Timestamp) -> bool {
        if !self.active {
            return false;
        }

        let reference = *self.reference.get_or_insert(now);
        let elapsed = now - reference - self.delay;
        if elapsed < 0.0 {
            // Still inside the delay window; keep the frame chain alive
            // without publishing.
            return true;
        }

        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration).min(1.0)
        };
        let eased = self.easing.apply_f64(progress);
        self.count = (self.start as f64 + (self.end - self.start) as f64 * eased).floor() as i64;
        self.published = true;

        if progress < 1.0 {
            true
        } else {
            // Publish the exact end value, correcting any floor undershoot.
            self.count = self.end;
            self.complete = true;
            self.active = false;
            tracing::debug!(run = self.run, end = self.end, "count-up complete");
            false
        }
    }

    /// Cancel the in-flight run. No further ticks publish; the last published
    /// output (including the completion flag) is left standing.
    pub fn cancel(&mut self) {
        if self.active {
            tracing::trace!(run = self.run, "count-up cancelled");
        }
        self.run += 1;
        self.reference = None;
        self.active = false;
    }

    /// Begin a fresh run with the current configuration.
    fn restart(&mut self) {
        self.run += 1;
        self.reference = None;
        self.complete = false;
        if self.enabled {
            self.active = true;
            if !self.published {
                self.count = self.start;
            }
            tracing::trace!(
                run = self.run,
                start = self.start,
                end = self.end,
                duration_ms = self.duration,
                delay_ms = self.delay,
                "count-up run started"
            );
        } else {
            self.active = false;
            self.count = self.start;
            self.published = true;
        }
    }
}
