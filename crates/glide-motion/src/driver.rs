//! Per-view motion driver.
//!
//! Hosts instantiate adapters per view and tear them down when the view
//! unmounts. `MotionDriver` is the registry that owns those instances: at
//! most one counter and one scroll tracker per id, a single `tick` that
//! drives everything for the frame, and an aggregate needs-frame signal the
//! host uses to decide whether to keep scheduling frames.

use ahash::HashMap;
use glide_core::{Timestamp, Viewport};
use std::fmt;

use crate::count_up::CountUp;
use crate::scroll_progress::ScrollTracker;

/// A stable identifier for a mounted motion adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MotionId(u64);

impl MotionId {
    /// Create a motion ID from a string key.
    ///
    /// Uses FNV-1a hash for fast, consistent hashing.
    pub fn new(key: &str) -> Self {
        Self(Self::hash_str(key))
    }

    /// Create a motion ID from raw u64 (for generated IDs).
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    fn hash_str(s: &str) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;

        let mut hash = FNV_OFFSET_BASIS;
        for byte in s.as_bytes() {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }
}

impl fmt::Display for MotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MotionId(0x{:016x})", self.0)
    }
}

impl From<&str> for MotionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MotionId {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

/// Registry driving all mounted motion adapters for a host.
pub struct MotionDriver {
    counters: HashMap<MotionId, CountUp>,
    scrolls: HashMap<MotionId, ScrollTracker>,
}

impl MotionDriver {
    /// Create an empty driver.
    pub fn new() -> Self {
        Self {
            counters: HashMap::default(),
            scrolls: HashMap::default(),
        }
    }

    // -- Mounting --

    /// Mount a counter under the given id, replacing any existing one.
    ///
    /// Replacement cancels the previous instance first, so its pending run
    /// can never publish after teardown.
    pub fn mount_counter(&mut self, id: MotionId, counter: CountUp) {
        if let Some(old) = self.counters.get_mut(&id) {
            old.cancel();
        }
        tracing::trace!(%id, "counter mounted");
        self.counters.insert(id, counter);
    }

    /// Mount a scroll tracker under the given id, replacing any existing one.
    /// The new tracker's initial sample runs on the next tick.
    pub fn mount_scroll(&mut self, id: MotionId) {
        self.scrolls.insert(id, ScrollTracker::new());
    }

    /// Unmount everything registered under the given id.
    pub fn unmount(&mut self, id: MotionId) {
        if let Some(mut counter) = self.counters.remove(&id) {
            counter.cancel();
        }
        self.scrolls.remove(&id);
        tracing::trace!(%id, "unmounted");
    }

    // -- Access --

    /// Get a mounted counter.
    pub fn counter(&self, id: MotionId) -> Option<&CountUp> {
        self.counters.get(&id)
    }

    /// Get a mounted counter mutably (for configuration changes).
    pub fn counter_mut(&mut self, id: MotionId) -> Option<&mut CountUp> {
        self.counters.get_mut(&id)
    }

    /// Get a mounted scroll tracker.
    pub fn scroll(&self, id: MotionId) -> Option<&ScrollTracker> {
        self.scrolls.get(&id)
    }

    /// Number of mounted adapters.
    pub fn len(&self) -> usize {
        self.counters.len() + self.scrolls.len()
    }

    /// Whether nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty() && self.scrolls.is_empty()
    }

    // -- Driving --

    /// Fan a viewport scroll event out to all scroll trackers.
    pub fn on_scroll(&mut self) {
        for tracker in self.scrolls.values_mut() {
            tracker.on_scroll();
        }
    }

    /// Drive every mounted adapter for one frame.
    ///
    /// Returns `true` if any adapter still wants a frame; the host keeps
    /// scheduling frames while this holds.
    pub fn tick(&mut self, now: Timestamp, viewport: &impl Viewport) -> bool {
        let mut any_active = false;

        for counter in self.counters.values_mut() {
            any_active |= counter.tick(now);
        }
        for tracker in self.scrolls.values_mut() {
            tracker.tick(viewport);
            any_active |= tracker.needs_frame();
        }

        any_active
    }

    /// Whether any adapter wants a frame without ticking.
    pub fn needs_frame(&self) -> bool {
        self.counters.values().any(|c| c.needs_frame())
            || self.scrolls.values().any(|s| s.needs_frame())
    }

    /// Unmount all adapters.
    pub fn clear(&mut self) {
        for counter in self.counters.values_mut() {
            counter.cancel();
        }
        self.counters.clear();
        self.scrolls.clear();
    }
}

impl Default for MotionDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::FixedViewport;

    #[test]
    fn motion_id_is_stable() {
        let a = MotionId::new("stats_counter");
        let b = MotionId::new("stats_counter");
        let c = MotionId::new("page_progress");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let d: MotionId = "stats_counter".into();
        assert_eq!(a, d);
    }

    #[test]
    fn one_instance_per_id() {
        let mut driver = MotionDriver::new();
        let id = MotionId::new("counter");

        driver.mount_counter(id, CountUp::new(100));
        driver.mount_counter(id, CountUp::new(200));
        assert_eq!(driver.len(), 1);

        driver.mount_scroll(id);
        driver.mount_scroll(id);
        assert_eq!(driver.len(), 2);
    }

    #[test]
    fn tick_drives_counters_and_scrolls() {
        let mut driver = MotionDriver::new();
        let counter_id = MotionId::new("counter");
        let scroll_id = MotionId::new("scroll");

        driver.mount_counter(counter_id, CountUp::new(100).duration(1000.0));
        driver.mount_scroll(scroll_id);

        let mut viewport = FixedViewport::new(2000.0, 800.0);
        viewport.set_scroll_y(600.0);

        assert!(driver.tick(0.0, &viewport));
        assert_eq!(driver.scroll(scroll_id).unwrap().progress(), 0.5);

        assert!(!driver.tick(1000.0, &viewport));
        let counter = driver.counter(counter_id).unwrap();
        assert!(counter.is_complete());
        assert_eq!(counter.count(), 100);
        assert!(!driver.needs_frame());
    }

    #[test]
    fn scroll_event_requests_a_frame() {
        let mut driver = MotionDriver::new();
        let id = MotionId::new("scroll");
        driver.mount_scroll(id);

        let mut viewport = FixedViewport::new(2000.0, 800.0);
        driver.tick(0.0, &viewport);
        assert!(!driver.needs_frame());

        viewport.set_scroll_y(1200.0);
        driver.on_scroll();
        assert!(driver.needs_frame());

        driver.tick(16.0, &viewport);
        assert_eq!(driver.scroll(id).unwrap().progress(), 1.0);
        assert!(!driver.needs_frame());
    }

    #[test]
    fn unmount_removes_both_kinds() {
        let mut driver = MotionDriver::new();
        let id = MotionId::new("view");
        driver.mount_counter(id, CountUp::new(10));
        driver.mount_scroll(id);
        assert_eq!(driver.len(), 2);

        driver.unmount(id);
        assert!(driver.is_empty());
        assert!(driver.counter(id).is_none());
        assert!(driver.scroll(id).is_none());
    }

    #[test]
    fn clear_unmounts_everything() {
        let mut driver = MotionDriver::new();
        driver.mount_counter(MotionId::new("a"), CountUp::new(1));
        driver.mount_scroll(MotionId::new("b"));

        driver.clear();
        assert!(driver.is_empty());
        assert!(!driver.needs_frame());
    }
}
