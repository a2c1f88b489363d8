//! Suspend, restore, and explicit camera moves for [`WalkController`]

use std::time::Duration;

use glam::Vec3;
use web_time::Instant;

use super::WalkController;
use crate::animation::{CameraTransition, EasingFunction};
use crate::camera::{CameraTransform, MotionTargets};
use crate::control::{ControlState, RestoreOutcome};
use crate::error::ControlError;

impl WalkController {
    /// Stop input from driving the camera and save a snapshot to return to.
    /// A second suspend overwrites the first snapshot. In-flight inertia,
    /// gestures and `animate_to` moves are cancelled.
    pub fn suspend(&mut self) -> Result<(), ControlError> {
        self.ensure_running()?;
        self.inertia.cancel();
        self.abandon_gesture();
        self.animation = None;
        self.control.suspend(self.snapshot());
        log::info!("controls suspended at depth {:.1}", self.transform.depth());
        Ok(())
    }

    /// Return to the saved snapshot.
    ///
    /// A zero duration applies the snapshot synchronously. Otherwise the
    /// camera eases back (cubic-out) and targets, direction and zone are
    /// applied together on the final frame. Without a snapshot controls
    /// simply become active.
    pub fn restore(
        &mut self,
        duration: Duration,
        now: Instant,
    ) -> Result<RestoreOutcome, ControlError> {
        self.ensure_running()?;
        if self.control.state() != ControlState::Restoring {
            self.animation = None;
        }
        let outcome = self.control.begin_restore(self.transform, duration, now);
        match outcome {
            RestoreOutcome::Immediate(snapshot) => {
                self.apply_snapshot(snapshot);
                log::info!("controls restored");
            }
            RestoreOutcome::Animating => {
                log::debug!("restoring over {}ms", duration.as_millis());
            }
            RestoreOutcome::NoSnapshot | RestoreOutcome::AlreadyRestoring => {}
        }
        Ok(outcome)
    }

    /// Enable or disable input without touching the snapshot.
    pub fn toggle(&mut self, enabled: bool) -> Result<(), ControlError> {
        self.ensure_running()?;
        if !enabled {
            self.inertia.cancel();
            self.abandon_gesture();
        }
        self.control.set_enabled(enabled);
        log::debug!("controls {:?}", self.control.state());
        Ok(())
    }

    /// Move the camera to `position` with Euler `rotation_deg` (degrees)
    /// over `duration`. Works while suspended. On completion the motion
    /// targets equal the end transform, so nothing drifts afterwards.
    ///
    /// # Errors
    ///
    /// [`ControlError::Inactive`] while a restore is running.
    pub fn animate_to(
        &mut self,
        position: Vec3,
        rotation_deg: Vec3,
        duration: Duration,
        now: Instant,
    ) -> Result<(), ControlError> {
        self.ensure_running()?;
        if self.control.state() == ControlState::Restoring {
            return Err(ControlError::Inactive);
        }
        self.inertia.cancel();
        let to = CameraTransform::new(
            position,
            Vec3::new(rotation_deg.x.to_radians(), rotation_deg.y.to_radians(), 0.0),
        );
        if duration.is_zero() {
            self.transform = to;
            self.targets = MotionTargets::at(&to);
            self.animation = None;
            return Ok(());
        }
        self.animation = Some(CameraTransition::new(
            "animate_to",
            self.transform,
            to,
            duration,
            EasingFunction::DEFAULT,
            now,
        ));
        Ok(())
    }

    /// Suspend controls and move the camera to a showcase viewpoint.
    pub fn showcase(
        &mut self,
        position: Vec3,
        rotation_deg: Vec3,
        duration: Duration,
        now: Instant,
    ) -> Result<(), ControlError> {
        self.suspend()?;
        self.animate_to(position, rotation_deg, duration, now)
    }

    /// Leave a showcase viewpoint by restoring the snapshot.
    pub fn dismiss_showcase(
        &mut self,
        duration: Duration,
        now: Instant,
    ) -> Result<RestoreOutcome, ControlError> {
        self.restore(duration, now)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{controller, frame};
    use super::*;
    use crate::engine::FrameStatus;

    #[test]
    fn input_is_refused_while_suspended() {
        let (mut c, _scene) = controller();
        c.suspend().unwrap();
        assert!(matches!(c.move_by(10.0), Err(ControlError::Inactive)));
        assert!(c.has_snapshot());
    }

    #[test]
    fn restore_without_snapshot_activates() {
        let (mut c, _scene) = controller();
        c.toggle(false).unwrap();
        assert!(!c.is_active());
        assert!(!c.has_snapshot());
        let outcome = c.restore(Duration::from_millis(300), Instant::now()).unwrap();
        assert_eq!(outcome, RestoreOutcome::NoSnapshot);
        assert!(c.is_active());
    }

    #[test]
    fn animate_to_runs_while_suspended_and_settles_targets() {
        let (mut c, mut scene) = controller();
        let now = Instant::now();
        c.suspend().unwrap();
        let end = Vec3::new(2.0, 3.0, 50.0);
        c.animate_to(end, Vec3::new(0.0, 90.0, 0.0), Duration::from_millis(200), now)
            .unwrap();
        assert_eq!(frame(&mut c, &mut scene, now + Duration::from_millis(100)), FrameStatus::Held);
        assert!(c.is_animating());
        let _ = frame(&mut c, &mut scene, now + Duration::from_millis(200));
        assert!(!c.is_animating());
        assert_eq!(c.transform().position, end);
        assert_eq!(c.targets().position, end);
        assert!((c.targets().rotation.y - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(scene.camera().map(|cam| cam.position), Some(end));
    }

    #[test]
    fn eased_restore_returns_to_snapshot() {
        let (mut c, mut scene) = controller();
        let now = Instant::now();
        let saved = c.transform();
        c.showcase(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Duration::ZERO, now)
            .unwrap();
        let _ = c.dismiss_showcase(Duration::from_millis(400), now).unwrap();
        assert_eq!(c.control_state(), ControlState::Restoring);
        assert!(matches!(
            c.animate_to(Vec3::ZERO, Vec3::ZERO, Duration::ZERO, now),
            Err(ControlError::Inactive)
        ));
        let _ = frame(&mut c, &mut scene, now + Duration::from_millis(200));
        assert_eq!(c.control_state(), ControlState::Restoring);
        let _ = frame(&mut c, &mut scene, now + Duration::from_millis(400));
        assert!(c.is_active());
        assert_eq!(c.transform(), saved);
    }
}
