//! Per-frame update for [`WalkController`]

use glam::Vec3;
use web_time::Instant;

use super::WalkController;
use crate::camera::{
    classify, ease_angle, facing_yaw, MotionTargets, ZoneTransition,
};
use crate::door::{Approach, DoorContext};
use crate::error::ControlError;
use crate::runtime::SceneRuntime;
use crate::scheduler::FrameHandle;

/// What a frame callback did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// The handle was not the outstanding request; nothing happened.
    Stale,
    /// Controls are active and the integration loop ran.
    Integrated,
    /// Suspended, restoring, or animating: the camera followed the running
    /// transition (if any) without integrating input.
    Held,
}

impl WalkController {
    /// Display-refresh callback.
    ///
    /// Order within a frame: due timers, the camera-handle check, running
    /// transitions, then (when active) inertia, zone edges, integration,
    /// facing objects and door proximity. The next frame is requested even
    /// when this one fails, so a lost camera never stops the loop.
    ///
    /// # Errors
    ///
    /// [`ControlError::MissingHandle`] if the controller is not running or
    /// the scene camera is gone. Running transitions end on a lost camera:
    /// a restore applies its snapshot to the logical state.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        now: Instant,
        runtime: &mut dyn SceneRuntime,
    ) -> Result<FrameStatus, ControlError> {
        self.ensure_running()?;
        if self.pending_frame != Some(handle) {
            log::trace!("stale frame {handle:?} ignored");
            return Ok(FrameStatus::Stale);
        }
        self.pending_frame = None;
        let result = self.run_frame(now, runtime);
        self.pending_frame = Some(self.scheduler.request_frame());
        result
    }

    /// Fire every timer due at `now`. Also runs at the start of each frame.
    pub fn poll_timers(&mut self, now: Instant) {
        if self.ensure_running().is_err() {
            return;
        }
        for timer in self.timers.drain_due(now) {
            self.doors.on_timer(&timer, &mut self.arbiter);
        }
    }

    fn run_frame(
        &mut self,
        now: Instant,
        runtime: &mut dyn SceneRuntime,
    ) -> Result<FrameStatus, ControlError> {
        self.poll_timers(now);

        if runtime.camera_mut().is_none() {
            self.end_transitions_without_camera();
            return Err(ControlError::MissingHandle);
        }

        self.advance_transitions(now);
        let status = if self.control.is_active() && self.animation.is_none() {
            self.step_inertia(now);
            self.update_zone();
            self.transform
                .ease_toward(&self.targets, self.options.camera.smooth_factor);
            self.face_objects(runtime);
            self.check_doors(now, runtime);
            FrameStatus::Integrated
        } else {
            FrameStatus::Held
        };

        if let Some(camera) = runtime.camera_mut() {
            *camera = self.transform;
        }
        Ok(status)
    }

    fn advance_transitions(&mut self, now: Instant) {
        if let Some(step) = self.control.step_restore(now) {
            self.transform = step.transform;
            if let Some(snapshot) = step.completed {
                self.apply_snapshot(snapshot);
                log::info!("controls restored");
            }
        }

        let Some(animation) = &self.animation else {
            return;
        };
        let sample = animation.sample(now);
        self.transform = sample.transform;
        if sample.finished {
            log::debug!("{} finished", animation.name());
            self.targets = MotionTargets::at(&self.transform);
            self.animation = None;
        }
    }

    fn end_transitions_without_camera(&mut self) {
        self.inertia.cancel();
        if let Some(snapshot) = self.control.abort_restore() {
            log::warn!("camera lost mid-restore; snapshot applied");
            self.apply_snapshot(snapshot);
        }
        if let Some(animation) = self.animation.take() {
            log::warn!("camera lost during {}; jumping to its end", animation.name());
            self.transform = animation.target();
            self.targets = MotionTargets::at(&self.transform);
        }
    }

    fn step_inertia(&mut self, now: Instant) {
        let Some(pixels) = self.inertia.step(now) else {
            return;
        };
        if !self.zone.allows_look() {
            self.inertia.cancel();
            return;
        }
        let yaw = self.targets.rotation.y + pixels * self.swipe_gain();
        let clamped = self.clamp_yaw(yaw);
        if (clamped - yaw).abs() > f32::EPSILON {
            self.inertia.cancel();
        }
        self.targets.rotation.y = clamped;
    }

    fn update_zone(&mut self) {
        let zone = classify(self.transform.depth(), self.options.motion.door_threshold);
        match self.zone.observe(zone) {
            Some(ZoneTransition::EnteredInterior) => {
                log::debug!("entered interior at {:.1}", self.transform.depth());
            }
            Some(ZoneTransition::EnteredTerrace) => {
                log::debug!("entered terrace at {:.1}", self.transform.depth());
                if !self.capabilities.is_touch_primary
                    && !self.zone.has_performed_first_turn
                {
                    self.targets.rotation =
                        Vec3::new(0.0, self.direction.base_yaw(), 0.0);
                    self.targets.position.x = self.initial_position.x;
                    self.inertia.cancel();
                }
            }
            None => {}
        }
    }

    fn face_objects(&self, runtime: &mut dyn SceneRuntime) {
        let factor = self.options.camera.smooth_factor;
        for id in &self.options.camera.facing_objects {
            let Some(position) = runtime.object_position(id) else {
                continue;
            };
            let target = facing_yaw(self.transform.position, position);
            if let Some(rotation) = runtime.object_rotation_mut(id) {
                rotation.y = ease_angle(rotation.y, target, factor);
            }
        }
    }

    fn check_doors(&mut self, now: Instant, runtime: &mut dyn SceneRuntime) {
        let approach = Approach {
            depth: self.transform.depth(),
            direction: self.direction,
            zone: self.zone.current,
        };
        let mut ctx = DoorContext {
            runtime,
            timers: &mut self.timers,
            arbiter: &mut self.arbiter,
            now,
        };
        let _ = self.doors.check_proximity(approach, &mut ctx);
    }
}
