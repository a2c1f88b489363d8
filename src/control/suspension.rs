use std::time::Duration;

use web_time::Instant;

use crate::animation::{CameraTransition, EasingFunction};
use crate::camera::{CameraTransform, Direction, MotionTargets, ZoneState};

/// Whether user input drives the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    /// Input and the integration loop drive the camera.
    #[default]
    Active,
    /// Input is ignored; the camera holds or is moved by `animate_to`.
    Suspended,
    /// Easing back to the saved snapshot. Cannot be interrupted except by
    /// another suspension.
    Restoring,
}

/// Everything needed to put the camera back exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavedCameraSnapshot {
    /// Camera transform at suspension.
    pub transform: CameraTransform,
    /// Motion targets at suspension.
    pub targets: MotionTargets,
    /// Travel direction at suspension.
    pub direction: Direction,
    /// Zone and first-turn flag at suspension.
    pub zone: ZoneState,
}

/// What a restore request did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RestoreOutcome {
    /// No snapshot existed; controls are simply active again.
    NoSnapshot,
    /// Zero duration: the snapshot is returned for synchronous application.
    Immediate(SavedCameraSnapshot),
    /// An eased return started.
    Animating,
    /// A restore is already running; the request was ignored.
    AlreadyRestoring,
}

/// One frame of a running restore.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestoreStep {
    /// Camera transform for this frame.
    pub transform: CameraTransform,
    /// Set on the final frame: the snapshot to apply in full.
    pub completed: Option<SavedCameraSnapshot>,
}

#[derive(Debug, Clone)]
struct RestoreInFlight {
    transition: CameraTransition,
    snapshot: SavedCameraSnapshot,
}

/// Owns the control state and the single saved snapshot.
///
/// Suspending always overwrites the snapshot, so a double suspend followed
/// by a restore returns to the state at the second suspension.
#[derive(Debug, Clone, Default)]
pub struct SuspensionManager {
    state: ControlState,
    snapshot: Option<SavedCameraSnapshot>,
    restoring: Option<RestoreInFlight>,
}

impl SuspensionManager {
    /// Active, with no snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current control state.
    #[must_use]
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Whether input drives the camera.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == ControlState::Active
    }

    /// Whether a snapshot is waiting to be restored.
    #[must_use]
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// The waiting snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&SavedCameraSnapshot> {
        self.snapshot.as_ref()
    }

    /// Suspend controls and save `snapshot`, replacing any earlier one. A
    /// restore in flight is abandoned.
    pub fn suspend(&mut self, snapshot: SavedCameraSnapshot) {
        if self.restoring.take().is_some() {
            log::debug!("suspend interrupted a running restore");
        }
        self.snapshot = Some(snapshot);
        self.state = ControlState::Suspended;
    }

    /// Begin returning to the snapshot from the camera's current transform.
    ///
    /// With no snapshot the state simply flips to active. With a zero
    /// duration the snapshot is handed back for synchronous application and
    /// the state is active on return.
    pub fn begin_restore(
        &mut self,
        from: CameraTransform,
        duration: Duration,
        now: Instant,
    ) -> RestoreOutcome {
        if self.restoring.is_some() {
            return RestoreOutcome::AlreadyRestoring;
        }
        let Some(snapshot) = self.snapshot.take() else {
            self.state = ControlState::Active;
            return RestoreOutcome::NoSnapshot;
        };
        if duration.is_zero() {
            self.state = ControlState::Active;
            return RestoreOutcome::Immediate(snapshot);
        }
        self.restoring = Some(RestoreInFlight {
            transition: CameraTransition::new(
                "restore",
                from,
                snapshot.transform,
                duration,
                EasingFunction::CubicOut,
                now,
            ),
            snapshot,
        });
        self.state = ControlState::Restoring;
        RestoreOutcome::Animating
    }

    /// Advance a running restore. Returns `None` when nothing is restoring.
    /// On the final frame the state becomes active and the snapshot is
    /// returned for atomic application.
    pub fn step_restore(&mut self, now: Instant) -> Option<RestoreStep> {
        let in_flight = self.restoring.as_ref()?;
        let sample = in_flight.transition.sample(now);
        if !sample.finished {
            return Some(RestoreStep {
                transform: sample.transform,
                completed: None,
            });
        }
        let snapshot = self.restoring.take().map(|r| r.snapshot)?;
        self.state = ControlState::Active;
        Some(RestoreStep {
            transform: snapshot.transform,
            completed: Some(snapshot),
        })
    }

    /// Abandon a running restore because the camera went away. The state
    /// becomes active and the snapshot is returned so the caller can apply
    /// it to the logical state.
    pub fn abort_restore(&mut self) -> Option<SavedCameraSnapshot> {
        let snapshot = self.restoring.take()?.snapshot;
        self.state = ControlState::Active;
        Some(snapshot)
    }

    /// Enable or disable input without touching the snapshot. Disabling
    /// during a restore abandons it and keeps its snapshot waiting; enabling
    /// during a restore is ignored.
    pub fn set_enabled(&mut self, enabled: bool) {
        match (enabled, self.state) {
            (true, ControlState::Restoring) => {
                log::debug!("enable ignored while restoring");
            }
            (true, _) => self.state = ControlState::Active,
            (false, _) => {
                if let Some(in_flight) = self.restoring.take() {
                    self.snapshot = Some(in_flight.snapshot);
                }
                self.state = ControlState::Suspended;
            }
        }
    }

    /// Drop the snapshot and any running restore, and go active.
    pub fn reset(&mut self) {
        self.snapshot = None;
        self.restoring = None;
        self.state = ControlState::Active;
    }
}
