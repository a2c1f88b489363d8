//! Read-only queries for [`WalkController`]

use web_time::Instant;

use super::WalkController;
use crate::camera::{CameraTransform, Direction, MotionTargets, Zone};
use crate::control::{ArbiterFlag, ControlState};
use crate::options::Options;
use crate::scheduler::FrameHandle;

// ── Control ──

impl WalkController {
    /// Whether input drives the camera.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.control.is_active()
    }

    /// Current control state.
    #[must_use]
    pub fn control_state(&self) -> ControlState {
        self.control.state()
    }

    /// Whether a suspend snapshot is waiting. False while a restore is
    /// consuming it.
    #[must_use]
    pub fn has_snapshot(&self) -> bool {
        self.control.has_snapshot()
    }

    /// Whether an `animate_to` move is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

// ── Camera ──

impl WalkController {
    /// Logical camera transform.
    #[must_use]
    pub fn transform(&self) -> CameraTransform {
        self.transform
    }

    /// What the integration loop is easing toward.
    #[must_use]
    pub fn targets(&self) -> MotionTargets {
        self.targets
    }

    /// Travel direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Zone observed on the last frame.
    #[must_use]
    pub fn current_zone(&self) -> Zone {
        self.zone.current
    }

    /// Whether the session's first turn has happened.
    #[must_use]
    pub fn has_performed_first_turn(&self) -> bool {
        self.zone.has_performed_first_turn
    }

    /// Whether swipe inertia is coasting.
    #[must_use]
    pub fn is_inertia_running(&self) -> bool {
        self.inertia.is_running()
    }

    /// Whether a touch swipe currently owns the view.
    #[must_use]
    pub fn is_swipe_active(&self, now: Instant) -> bool {
        self.arbiter.is_set(ArbiterFlag::SwipeActive, now)
    }
}

// ── Doors ──

impl WalkController {
    /// Whether a door is open.
    #[must_use]
    pub fn is_door_open(&self, id: &str) -> bool {
        self.doors.is_open(id)
    }

    /// Whether a door is locked by its cooldown.
    #[must_use]
    pub fn is_door_cooling_down(&self, id: &str) -> bool {
        self.doors.is_cooling_down(id)
    }

    /// Whether a door is opening on its own; hosts should ignore door clicks
    /// meanwhile.
    #[must_use]
    pub fn is_auto_door_opening(&self, now: Instant) -> bool {
        self.arbiter.is_set(ArbiterFlag::AutoDoorOpening, now)
    }
}

// ── Lifecycle ──

impl WalkController {
    /// The outstanding frame request the host should answer.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Options the controller was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Update the viewport after a host resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.normalizer.resize(width, height);
    }
}
