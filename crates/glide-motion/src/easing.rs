//! Easing functions for motion adapters.
//!
//! An easing function maps a linear time fraction in [0, 1] to an adjusted
//! progress fraction, shaping the perceived rate of change. Every variant is
//! monotonic on [0, 1], which the count-up animator relies on for its
//! monotonic output invariant.

/// Easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation
    Linear,
    /// Quadratic ease in (slow start)
    QuadIn,
    /// Quadratic ease out (slow end)
    QuadOut,
    /// Cubic ease in
    CubicIn,
    /// Cubic ease out
    CubicOut,
    /// Quartic ease out (fast start, decelerating approach to the end).
    /// Default for count-up animations.
    #[default]
    QuartOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }

    /// Apply the easing function in `f64`.
    ///
    /// The `f32` curves saturate to 1.0 well before `t` reaches 1 (quartic
    /// ease-out runs out of resolution near `t = 0.982`); callers whose
    /// downstream arithmetic distinguishes "almost done" from "done", like
    /// the count-up animator, use this path.
    pub fn apply_f64(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}
