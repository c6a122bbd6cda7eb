//! Scroll Progress Example - simulated page scroll
//!
//! Simulates a user scrolling a 2000px document inside an 800px viewport and
//! prints the normalized progress the tracker reports each frame. Scroll
//! events arrive in bursts; the tracker coalesces each burst into a single
//! recomputation per frame.

use glide_core::{FixedViewport, Viewport, logging};
use glide_motion::{MotionDriver, MotionId};

fn main() {
    logging::init();

    let mut viewport = FixedViewport::new(2000.0, 800.0);
    let mut driver = MotionDriver::new();
    let id = MotionId::new("page_progress");
    driver.mount_scroll(id);

    // Initial sample at mount (frame 0).
    driver.tick(0.0, &viewport);

    let mut now = 0.0;
    for frame in 1..=10 {
        // A burst of scroll events between frames; only the latest position
        // is sampled.
        for step in 0..3 {
            viewport.set_scroll_y((frame as f32 * 3.0 + step as f32) * 40.0);
            driver.on_scroll();
        }

        now += 16.0;
        driver.tick(now, &viewport);

        let tracker = driver.scroll(id).unwrap();
        tracing::info!(
            frame,
            scroll_y = tracker.scroll_y(),
            progress = tracker.progress(),
            scrollable = viewport.scrollable_height(),
            "frame sampled"
        );
    }
}
