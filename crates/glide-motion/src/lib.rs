//! Glide Motion - reactive presentation-state adapters
//!
//! Two small adapters over the host's animation-frame and scroll primitives,
//! consumed by view components to drive visual effects:
//! - [`CountUp`] - animates a displayed integer from a start value to an end
//!   value over time, with easing ("counting up" statistics)
//! - [`ScrollTracker`] - reports the vertical scroll position as a normalized
//!   fraction of the total scrollable height (progress indicators)
//!
//! Both are explicit state machines driven by injected timestamps and
//! viewport metrics from `glide-core`, so they are testable without a real
//! display refresh loop.
//!
//! ## Quick Start
//!
//! ```
//! use glide_core::FixedViewport;
//! use glide_motion::{CountUp, MotionDriver, MotionId};
//!
//! let mut driver = MotionDriver::new();
//! driver.mount_counter(
//!     MotionId::new("downloads"),
//!     CountUp::new(1500).duration(1200.0).suffix("+"),
//! );
//! driver.mount_scroll(MotionId::new("page_progress"));
//!
//! let viewport = FixedViewport::new(2000.0, 800.0);
//!
//! // Host frame loop: keep ticking while any adapter wants a frame.
//! let mut now = 0.0;
//! while driver.tick(now, &viewport) {
//!     now += 16.0;
//! }
//! assert!(driver.counter(MotionId::new("downloads")).unwrap().is_complete());
//! ```

pub mod count_up;
pub mod driver;
pub mod easing;
pub mod scroll_progress;

pub use count_up::CountUp;
pub use driver::{MotionDriver, MotionId};
pub use easing::Easing;
pub use scroll_progress::ScrollTracker;

// Re-export the host abstractions adapters are driven with.
pub use glide_core::{
    Clock, FixedViewport, FrameTimer, ManualClock, SystemClock, Timestamp, Viewport,
};
