//! Exponentially smoothed velocity estimate for an active gesture.
//!
//! `v' = α·v + (1-α)·(Δposition / Δtime)`, in pixels per millisecond. The
//! same estimate drives live response and seeds inertia on release.

use glam::Vec2;
use web_time::Instant;

/// Floor for the sample interval so bursts of same-timestamp events never
/// divide by zero.
const MIN_DT_MS: f32 = 1.0;

/// Tracks a smoothed velocity from successive position samples.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    /// Weight kept from the previous estimate.
    alpha: f32,
    /// Current estimate in px/ms.
    velocity: Vec2,
    /// Previous sample.
    last: Option<(Vec2, Instant)>,
}

impl VelocityTracker {
    /// Create a tracker with the given smoothing weight in `[0, 1)`.
    #[must_use]
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 0.99),
            velocity: Vec2::ZERO,
            last: None,
        }
    }

    /// Clear the estimate and anchor a new gesture at `position`.
    pub fn begin(&mut self, position: Vec2, at: Instant) {
        self.velocity = Vec2::ZERO;
        self.last = Some((position, at));
    }

    /// Fold in a new sample and return the updated estimate.
    pub fn update(&mut self, position: Vec2, at: Instant) -> Vec2 {
        let Some((last_pos, last_at)) = self.last else {
            self.begin(position, at);
            return self.velocity;
        };
        let dt_ms = (at.saturating_duration_since(last_at).as_secs_f32()
            * 1000.0)
            .max(MIN_DT_MS);
        let instant = (position - last_pos) / dt_ms;
        self.velocity = self.velocity * self.alpha + instant * (1.0 - self.alpha);
        self.last = Some((position, at));
        self.velocity
    }

    /// Current estimate in px/ms.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Drop the estimate and anchor.
    pub fn reset(&mut self) {
        self.velocity = Vec2::ZERO;
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn converges_toward_constant_speed() {
        let t0 = Instant::now();
        let mut tracker = VelocityTracker::new(0.5);
        tracker.begin(Vec2::ZERO, t0);
        let mut v = Vec2::ZERO;
        for i in 1..=10u32 {
            v = tracker.update(
                Vec2::new(i as f32 * 10.0, 0.0),
                t0 + Duration::from_millis(u64::from(i) * 10),
            );
        }
        // 10 px per 10 ms = 1 px/ms
        assert!((v.x - 1.0).abs() < 0.01, "got {}", v.x);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn first_sample_is_smoothed_from_zero() {
        let t0 = Instant::now();
        let mut tracker = VelocityTracker::new(0.6);
        tracker.begin(Vec2::ZERO, t0);
        let v = tracker.update(Vec2::new(20.0, 0.0), t0 + Duration::from_millis(10));
        assert!((v.x - 0.8).abs() < 1e-5);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let t0 = Instant::now();
        let mut tracker = VelocityTracker::new(0.0);
        tracker.begin(Vec2::ZERO, t0);
        let v = tracker.update(Vec2::new(5.0, 0.0), t0);
        assert!(v.x.is_finite());
        assert_eq!(v.x, 5.0);
    }

    #[test]
    fn begin_clears_previous_estimate() {
        let t0 = Instant::now();
        let mut tracker = VelocityTracker::new(0.5);
        tracker.begin(Vec2::ZERO, t0);
        let _ = tracker.update(Vec2::new(50.0, 0.0), t0 + Duration::from_millis(5));
        tracker.begin(Vec2::ZERO, t0 + Duration::from_millis(100));
        assert_eq!(tracker.velocity(), Vec2::ZERO);
    }
}
