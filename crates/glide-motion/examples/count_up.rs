//! Count-Up Example - animating a statistic in the terminal
//!
//! Drives a `CountUp` with the real wall clock at roughly 60 frames per
//! second and prints the formatted value as it animates.

use glide_core::{FrameTimer, SystemClock, logging};
use glide_motion::CountUp;
use std::io::Write;
use std::thread;
use std::time::Duration;

fn main() {
    logging::init();

    let clock = SystemClock::new();
    let mut timer = FrameTimer::new();
    let mut counter = CountUp::new(1500).duration(2000.0).delay(250.0).suffix("+");

    tracing::info!("animating 0 -> 1500 over 2s after a 250ms delay");

    while counter.needs_frame() {
        timer.update(&clock);
        counter.tick(timer.now());

        print!("\rdownloads: {:>6}", counter.display_value());
        let _ = std::io::stdout().flush();

        thread::sleep(Duration::from_millis(16));
    }
    println!();

    tracing::info!(
        frames = timer.frame_count(),
        elapsed_ms = timer.elapsed_ms(),
        "animation complete"
    );
}
