//! Eased interpolation between two camera transforms.
//!
//! Used for the restore-from-snapshot return and for explicit `animate_to`
//! moves. The transition itself is pure: the caller samples it with the
//! frame time and writes the result into the camera.

use std::time::Duration;

use web_time::Instant;

use super::easing::EasingFunction;
use crate::camera::CameraTransform;

/// One sample of a running transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSample {
    /// Interpolated transform.
    pub transform: CameraTransform,
    /// Whether the transition has reached its end.
    pub finished: bool,
}

/// Time-boxed interpolation from one transform to another.
#[derive(Debug, Clone)]
pub struct CameraTransition {
    /// Transform at the start.
    from: CameraTransform,
    /// Transform at the end.
    to: CameraTransform,
    /// When the transition started.
    start_time: Instant,
    /// Total duration.
    duration: Duration,
    /// Progress curve.
    easing: EasingFunction,
    /// Debug name.
    name: &'static str,
}

impl CameraTransition {
    /// Start a transition at `now`.
    #[must_use]
    pub fn new(
        name: &'static str,
        from: CameraTransform,
        to: CameraTransform,
        duration: Duration,
        easing: EasingFunction,
        now: Instant,
    ) -> Self {
        Self {
            from,
            to,
            start_time: now,
            duration,
            easing,
            name,
        }
    }

    /// Debug name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Transform the transition ends on.
    #[must_use]
    pub fn target(&self) -> CameraTransform {
        self.to
    }

    /// Calculate normalized progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);

        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Sample the transition at `now`. The final sample is exactly the end
    /// transform.
    #[must_use]
    pub fn sample(&self, now: Instant) -> TransitionSample {
        let t = self.progress(now);
        if t >= 1.0 {
            return TransitionSample {
                transform: self.to,
                finished: true,
            };
        }
        TransitionSample {
            transform: self.from.lerp(&self.to, self.easing.evaluate(t)),
            finished: false,
        }
    }
}
