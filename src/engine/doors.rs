//! Door methods for [`WalkController`]

use web_time::Instant;

use super::WalkController;
use crate::door::{DoorContext, OpenCause};
use crate::error::ControlError;
use crate::runtime::SceneRuntime;

impl WalkController {
    /// Open a door directly, honouring its cooldown lock.
    pub fn trigger_door(
        &mut self,
        id: &str,
        now: Instant,
        runtime: &mut dyn SceneRuntime,
    ) -> Result<(), ControlError> {
        self.ensure_running()?;
        let mut ctx = DoorContext {
            runtime,
            timers: &mut self.timers,
            arbiter: &mut self.arbiter,
            now,
        };
        self.doors.trigger_door(id, OpenCause::Manual, &mut ctx)
    }

    /// Release a door's cooldown lock early. Returns whether a lock was
    /// held.
    pub fn clear_door_cooldown(&mut self, id: &str) -> Result<bool, ControlError> {
        self.ensure_running()?;
        self.doors
            .clear_cooldown(id, &mut self.timers, &mut self.arbiter)
    }

    /// Close a door.
    pub fn close_door(
        &mut self,
        id: &str,
        runtime: &mut dyn SceneRuntime,
    ) -> Result<(), ControlError> {
        self.ensure_running()?;
        self.doors.close_door(id, runtime)
    }
}
