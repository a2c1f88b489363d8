//! Post-release swipe inertia.
//!
//! After a qualifying swipe the release velocity keeps turning the view:
//! each step multiplies the velocity by the damping factor and yields the
//! displacement for one nominal frame. The engine stops at the first step
//! whose velocity falls under the minimum, or once the time cap passes.
//! Starting a new gesture cancels it immediately.

use std::time::Duration;

use web_time::Instant;

use crate::options::InputOptions;

/// Duration of one nominal 60 Hz frame in milliseconds. Inertia advances by
/// this much per step regardless of the host's real frame interval.
pub const NOMINAL_FRAME_MS: f32 = 1000.0 / 60.0;

/// Decaying scalar velocity fed back into yaw after a swipe.
#[derive(Debug, Clone)]
pub struct InertiaEngine {
    /// Current velocity in px/ms; zero when idle.
    velocity: f32,
    /// Set while running.
    started_at: Option<Instant>,
    /// Steps taken since the start.
    steps: u32,
    damping: f32,
    min_velocity: f32,
    max_duration: Duration,
}

impl InertiaEngine {
    /// Idle engine with the configured damping and stop thresholds.
    #[must_use]
    pub fn new(options: &InputOptions) -> Self {
        Self {
            velocity: 0.0,
            started_at: None,
            steps: 0,
            damping: options.inertia_damping,
            min_velocity: options.inertia_min_velocity,
            max_duration: Duration::from_millis(options.inertia_max_duration_ms),
        }
    }

    /// Begin coasting from `velocity` (px/ms).
    pub fn start(&mut self, velocity: f32, now: Instant) {
        self.velocity = velocity;
        self.started_at = Some(now);
        self.steps = 0;
    }

    /// Stop immediately and clear the velocity.
    pub fn cancel(&mut self) {
        self.velocity = 0.0;
        self.started_at = None;
    }

    /// Whether inertia is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Current velocity in px/ms.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Steps taken since the last start.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Advance one frame. Returns the displacement in pixels to apply this
    /// frame, or `None` once inertia has stopped.
    pub fn step(&mut self, now: Instant) -> Option<f32> {
        let started_at = self.started_at?;
        if now.saturating_duration_since(started_at) > self.max_duration {
            log::trace!("inertia hit time cap after {} steps", self.steps);
            self.cancel();
            return None;
        }

        self.velocity *= self.damping;
        self.steps += 1;
        if self.velocity.abs() < self.min_velocity {
            self.cancel();
            return None;
        }
        Some(self.velocity * NOMINAL_FRAME_MS)
    }
}
