//! Scroll progress tracking.
//!
//! `ScrollTracker` reports the viewport's vertical scroll position as a
//! normalized fraction of the total scrollable height. Scroll events are
//! high-frequency, so the tracker coalesces bursts with a per-frame latch:
//! the host forwards every scroll event through [`ScrollTracker::on_scroll`],
//! but at most one recomputation runs per frame in [`ScrollTracker::tick`].

use glide_core::Viewport;

/// Normalized scroll position tracker.
///
/// Construction arms the latch, so the first tick samples the viewport even
/// if no scroll event has fired yet — a page already scrolled at mount time
/// reports the correct fraction immediately.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    /// Normalized progress in [0, 1]; 0 at the top, 1 at the bottom.
    progress: f32,
    /// Raw vertical offset at the last sample.
    scroll_y: f32,
    /// Offset seen by the last recomputation, `None` before the first.
    last_scroll_y: Option<f32>,
    /// In-flight guard: a recomputation is pending for the next tick.
    frame_pending: bool,
}

impl ScrollTracker {
    /// Create a tracker with an initial sample pending.
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            scroll_y: 0.0,
            last_scroll_y: None,
            frame_pending: true,
        }
    }

    /// Note a scroll event. Returns `true` if this armed the latch (i.e. a
    /// frame is now needed); repeat events within the same frame are no-ops.
    pub fn on_scroll(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Whether a recomputation is pending.
    #[inline]
    pub fn needs_frame(&self) -> bool {
        self.frame_pending
    }

    /// Run the pending recomputation, if any, against the viewport.
    pub fn tick(&mut self, viewport: &impl Viewport) {
        if !self.frame_pending {
            return;
        }
        self.frame_pending = false;

        let offset = viewport.scroll_y();
        if self.last_scroll_y == Some(offset) {
            return;
        }
        self.last_scroll_y = Some(offset);

        let scrollable = viewport.scrollable_height();
        // Content shorter than the viewport has nothing to scroll; report 0
        // rather than dividing by zero.
        let raw = if scrollable > 0.0 {
            offset / scrollable
        } else {
            0.0
        };
        self.progress = raw.clamp(0.0, 1.0);
        self.scroll_y = offset;
        tracing::trace!(
            progress = self.progress,
            scroll_y = self.scroll_y,
            "scroll sample"
        );
    }

    /// Normalized scroll progress in [0, 1].
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Raw vertical scroll offset at the last sample.
    #[inline]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::FixedViewport;

    #[test]
    fn initial_sample_runs_without_scroll_event() {
        let mut viewport = FixedViewport::new(2000.0, 800.0);
        viewport.set_scroll_y(600.0);

        let mut tracker = ScrollTracker::new();
        assert!(tracker.needs_frame());
        tracker.tick(&viewport);

        assert_eq!(tracker.progress(), 0.5);
        assert_eq!(tracker.scroll_y(), 600.0);
        assert!(!tracker.needs_frame());
    }

    #[test]
    fn midpoint_scroll_is_half_progress() {
        // documentHeight=2000, viewportHeight=800 -> scrollable 1200;
        // offset 600 -> progress 0.5.
        let mut viewport = FixedViewport::new(2000.0, 800.0);
        let mut tracker = ScrollTracker::new();
        tracker.tick(&viewport);

        viewport.set_scroll_y(600.0);
        tracker.on_scroll();
        tracker.tick(&viewport);
        assert_eq!(tracker.progress(), 0.5);
    }

    #[test]
    fn no_overflow_reports_zero() {
        // documentHeight == viewportHeight: nothing to scroll.
        let mut viewport = FixedViewport::new(800.0, 800.0);
        viewport.set_scroll_y(300.0);

        let mut tracker = ScrollTracker::new();
        tracker.tick(&viewport);
        assert_eq!(tracker.progress(), 0.0);
        assert_eq!(tracker.scroll_y(), 300.0);
    }

    #[test]
    fn progress_is_clamped_on_overscroll() {
        let mut viewport = FixedViewport::new(2000.0, 800.0);
        let mut tracker = ScrollTracker::new();
        tracker.tick(&viewport);

        // Rubber-band overscroll past the bottom.
        viewport.set_scroll_y(1500.0);
        tracker.on_scroll();
        tracker.tick(&viewport);
        assert_eq!(tracker.progress(), 1.0);

        // And past the top.
        viewport.set_scroll_y(-50.0);
        tracker.on_scroll();
        tracker.tick(&viewport);
        assert_eq!(tracker.progress(), 0.0);
    }

    #[test]
    fn burst_of_events_coalesces_to_one_recomputation() {
        let mut viewport = FixedViewport::new(2000.0, 800.0);
        let mut tracker = ScrollTracker::new();
        tracker.tick(&viewport);

        viewport.set_scroll_y(100.0);
        assert!(tracker.on_scroll());
        // Further events within the frame do not re-arm the latch.
        assert!(!tracker.on_scroll());
        assert!(!tracker.on_scroll());

        tracker.tick(&viewport);
        assert!(!tracker.needs_frame());
    }

    #[test]
    fn unchanged_offset_publishes_nothing() {
        let mut viewport = FixedViewport::new(2000.0, 800.0);
        viewport.set_scroll_y(600.0);

        let mut tracker = ScrollTracker::new();
        tracker.tick(&viewport);
        assert_eq!(tracker.progress(), 0.5);

        // Same offset sampled again: last-seen guard skips the publish.
        tracker.on_scroll();
        tracker.tick(&viewport);
        assert_eq!(tracker.progress(), 0.5);
        assert_eq!(tracker.scroll_y(), 600.0);
    }

    #[test]
    fn tick_without_pending_frame_is_a_no_op() {
        let mut viewport = FixedViewport::new(2000.0, 800.0);
        let mut tracker = ScrollTracker::new();
        tracker.tick(&viewport);

        viewport.set_scroll_y(600.0);
        // No on_scroll: the tracker must not sample.
        tracker.tick(&viewport);
        assert_eq!(tracker.progress(), 0.0);
    }
}
