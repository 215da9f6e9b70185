//! Interval-stepped offset animation for hosts without CSS transitions

use super::easing::ease_out;

/// Fallback animation state
#[derive(Clone, Debug, PartialEq)]
pub struct FallbackAnimation {
    /// Offset when the animation started (px)
    from: f32,
    /// Target offset (px)
    to: f32,
    /// Start time (ms timestamp)
    start_ms: f64,
    /// Requested duration (ms), never zero
    duration_ms: u32,
}

impl FallbackAnimation {
    /// Create a new animation. A zero duration is bumped to 1 ms so progress
    /// is always well defined.
    pub fn new(from: f32, to: f32, start_ms: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        let elapsed = (now_ms - self.start_ms) as f32;
        (elapsed / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Check if animation is complete
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Eased offset at `now_ms`, floored to whole pixels while running and
    /// exactly the target once complete
    pub fn current(&self, now_ms: f64) -> f32 {
        if self.is_complete(now_ms) {
            return self.to;
        }
        let y = ease_out(self.progress(now_ms));
        (y * (self.to - self.from) + self.from).floor()
    }

    /// Get the target offset
    pub fn target(&self) -> f32 {
        self.to
    }
}
