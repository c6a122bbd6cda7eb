//! Glide Core - host-environment abstractions for presentation adapters
//!
//! This crate provides the seams between the glide motion adapters and the
//! environment that hosts them:
//! - Injectable time sources (`Clock`, `SystemClock`, `ManualClock`)
//! - Per-frame bookkeeping for real-time hosts (`FrameTimer`)
//! - Read-only viewport scroll metrics (`Viewport`, `FixedViewport`)
//! - Logging initialization
//!
//! Adapters in `glide-motion` never read the wall clock or the viewport
//! directly; everything is injected through these abstractions so the state
//! machines can be driven with virtual timestamps in tests.

pub mod clock;
pub mod frame;
pub mod logging;
pub mod viewport;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use frame::FrameTimer;
pub use viewport::{FixedViewport, Viewport};
