//! Intro spin animation math.
//!
//! When a chart first appears the host can play a short yaw spin on the
//! chart node. The animation is pure math sampled per frame; the host owns
//! the clock and applies the returned yaw to the node transform.

/// Overshoot amount for the back-out easing curve.
const BACK_OVERSHOOT: f32 = 1.70158;

/// Default spin duration in seconds.
pub const DEFAULT_SPIN_DURATION: f32 = 2.5;

/// Default total yaw swept by the spin, in degrees.
pub const DEFAULT_SPIN_YAW_DEGREES: f32 = 360.0;

/// Back-out easing: decelerates past the target, then settles back.
///
/// Input is clamped to `[0, 1]`; output starts at 0, ends at 1 and
/// overshoots slightly on the way in.
#[must_use]
pub fn ease_back_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    t * t * ((BACK_OVERSHOOT + 1.0) * t + BACK_OVERSHOOT) + 1.0
}

/// A one-shot yaw spin played when a chart first appears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    /// Spin duration in seconds.
    pub duration: f32,

    /// Total yaw swept over the spin, in degrees.
    pub total_yaw_degrees: f32,
}

impl Default for SpinAnimation {
    fn default() -> Self {
        Self {
            duration: DEFAULT_SPIN_DURATION,
            total_yaw_degrees: DEFAULT_SPIN_YAW_DEGREES,
        }
    }
}

impl SpinAnimation {
    /// Returns the yaw in degrees at `elapsed` seconds into the spin.
    #[must_use]
    pub fn yaw_at(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return self.total_yaw_degrees;
        }
        self.total_yaw_degrees * ease_back_out(elapsed / self.duration)
    }

    /// Returns whether the spin has run its course.
    #[must_use]
    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.duration
    }
}
