//! Per-contact gesture state.
//!
//! A gesture is created on touch start and dropped on end or cancel. It
//! records where it began, where it is now, and the camera yaw at the moment
//! it started, so drag rotation is computed absolutely from that anchor and
//! never jumps.

use glam::Vec2;
use web_time::Instant;

use super::velocity::VelocityTracker;

/// Axis a gesture has locked onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAxis {
    /// Not enough travel yet to decide.
    Undecided,
    /// Sideways swipe: rotates the view.
    Horizontal,
    /// Up/down drag: walks along the rail.
    Vertical,
}

/// State of one active single-contact gesture.
#[derive(Debug, Clone)]
pub struct GestureState {
    start: Vec2,
    current: Vec2,
    /// Camera target yaw when the gesture began.
    pub initial_rotation_y: f32,
    axis: GestureAxis,
    velocity: VelocityTracker,
}

impl GestureState {
    /// Start a gesture at `position`.
    #[must_use]
    pub fn new(
        position: Vec2,
        at: Instant,
        initial_rotation_y: f32,
        velocity_smoothing: f32,
    ) -> Self {
        let mut velocity = VelocityTracker::new(velocity_smoothing);
        velocity.begin(position, at);
        Self {
            start: position,
            current: position,
            initial_rotation_y,
            axis: GestureAxis::Undecided,
            velocity,
        }
    }

    /// Record a new position and return the travel it contributes.
    ///
    /// The first time total travel exceeds `lock_distance` the gesture locks
    /// to whichever axis dominates and stays locked until it ends. The update
    /// that locks returns all travel since the start, so nothing made before
    /// the lock is lost; later updates return the step since the previous
    /// position.
    pub fn update(
        &mut self,
        position: Vec2,
        at: Instant,
        lock_distance: f32,
    ) -> Vec2 {
        let previous = self.current;
        self.current = position;
        let _ = self.velocity.update(position, at);

        let total = self.total();
        if self.axis == GestureAxis::Undecided && total.length() > lock_distance
        {
            self.axis = if total.x.abs() >= total.y.abs() {
                GestureAxis::Horizontal
            } else {
                GestureAxis::Vertical
            };
            return total;
        }
        self.current - previous
    }

    /// Total travel since the gesture began.
    #[must_use]
    pub fn total(&self) -> Vec2 {
        self.current - self.start
    }

    /// Locked axis, if any.
    #[must_use]
    pub fn axis(&self) -> GestureAxis {
        self.axis
    }

    /// Smoothed velocity in px/ms.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity.velocity()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn locks_to_dominant_axis_once() {
        let t0 = Instant::now();
        let mut g = GestureState::new(Vec2::new(100.0, 100.0), t0, 0.0, 0.5);
        let _ = g.update(Vec2::new(104.0, 101.0), t0, 10.0);
        assert_eq!(g.axis(), GestureAxis::Undecided);

        let _ = g.update(Vec2::new(120.0, 103.0), t0, 10.0);
        assert_eq!(g.axis(), GestureAxis::Horizontal);

        // Later vertical travel does not re-lock
        let _ = g.update(Vec2::new(120.0, 200.0), t0, 10.0);
        assert_eq!(g.axis(), GestureAxis::Horizontal);
    }

    #[test]
    fn update_returns_step_delta_and_tracks_velocity() {
        let t0 = Instant::now();
        let mut g = GestureState::new(Vec2::ZERO, t0, 1.0, 0.0);
        let step = g.update(Vec2::new(0.0, -30.0), t0 + Duration::from_millis(10), 10.0);
        assert_eq!(step, Vec2::new(0.0, -30.0));
        assert_eq!(g.axis(), GestureAxis::Vertical);
        assert!((g.velocity().y + 3.0).abs() < 1e-5);
        assert_eq!(g.initial_rotation_y, 1.0);
    }

    #[test]
    fn locking_update_carries_travel_made_before_the_lock() {
        let t0 = Instant::now();
        let mut g = GestureState::new(Vec2::ZERO, t0, 0.0, 0.5);
        assert_eq!(g.update(Vec2::new(0.0, -5.0), t0, 10.0), Vec2::new(0.0, -5.0));
        assert_eq!(g.axis(), GestureAxis::Undecided);

        // Locks here: the 5 px before the lock are part of the result
        assert_eq!(g.update(Vec2::new(0.0, -20.0), t0, 10.0), Vec2::new(0.0, -20.0));
        assert_eq!(g.axis(), GestureAxis::Vertical);
        assert_eq!(g.update(Vec2::new(0.0, -25.0), t0, 10.0), Vec2::new(0.0, -5.0));
    }
}
