//! Door open/close coordination.
//!
//! Each configured door has an open flag and a cooldown lock. Opening emits
//! the open event on the scene object, locks the door for the cooldown, and
//! arms a shorter guard so proximity checks near the boundary do not fire
//! again immediately. Both expire through the [`TimerQueue`]; nothing here
//! reads the clock. A cooldown can also be cleared early by the host.
//!
//! A failed emit leaves the door closed and unlocked so a later approach can
//! retry.

use std::time::Duration;

use rustc_hash::FxHashMap;
use web_time::Instant;

use crate::camera::{Direction, Zone};
use crate::control::{ArbiterFlag, InteractionArbiter};
use crate::error::ControlError;
use crate::options::{DoorOptions, MotionOptions};
use crate::runtime::SceneRuntime;
use crate::scheduler::{TimerId, TimerQueue};

/// Timer tasks owned by the door coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoorTimer {
    /// The cooldown lock on a door ran out.
    Cooldown(String),
    /// The post-open proximity guard ran out.
    RecentGuard,
}

/// Why a door is being opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenCause {
    /// The camera walked into the trigger band.
    Proximity,
    /// The host asked for it directly.
    Manual,
}

#[derive(Debug, Clone, Default)]
struct DoorRecord {
    open: bool,
    cooldown: Option<TimerId>,
}

/// Borrowed state a door operation needs from the controller.
pub struct DoorContext<'a> {
    /// Host scene the events are emitted on.
    pub runtime: &'a mut dyn SceneRuntime,
    /// Timer queue for cooldown and guard expiry.
    pub timers: &'a mut TimerQueue<DoorTimer>,
    /// Flags shared with the input handlers.
    pub arbiter: &'a mut InteractionArbiter,
    /// Current time.
    pub now: Instant,
}

/// Where the camera is, for the proximity check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approach {
    /// Camera depth.
    pub depth: f32,
    /// Travel direction.
    pub direction: Direction,
    /// Current zone.
    pub zone: Zone,
}

/// Opens doors on approach and tracks their cooldowns.
#[derive(Debug, Clone)]
pub struct DoorCoordinator {
    options: DoorOptions,
    door_threshold: f32,
    door_trigger: f32,
    doors: FxHashMap<String, DoorRecord>,
    /// Insertion order, so proximity opens doors in configured order.
    order: Vec<String>,
    recently_opened: bool,
}

impl DoorCoordinator {
    /// Coordinator for the configured door ids.
    #[must_use]
    pub fn new(options: &DoorOptions, motion: &MotionOptions) -> Self {
        let mut doors = FxHashMap::default();
        let mut order = Vec::with_capacity(options.ids.len());
        for id in &options.ids {
            if doors.insert(id.clone(), DoorRecord::default()).is_none() {
                order.push(id.clone());
            }
        }
        Self {
            options: options.clone(),
            door_threshold: motion.door_threshold,
            door_trigger: motion.door_trigger,
            doors,
            order,
            recently_opened: false,
        }
    }

    /// Whether a door is open.
    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.doors.get(id).is_some_and(|d| d.open)
    }

    /// Whether a door is locked by its cooldown.
    #[must_use]
    pub fn is_cooling_down(&self, id: &str) -> bool {
        self.doors.get(id).is_some_and(|d| d.cooldown.is_some())
    }

    /// Open a door unless its cooldown lock is held.
    ///
    /// Only the lock is consulted: opening an already-open door whose
    /// cooldown has expired emits again.
    pub fn trigger_door(
        &mut self,
        id: &str,
        cause: OpenCause,
        ctx: &mut DoorContext<'_>,
    ) -> Result<(), ControlError> {
        let cooldown = Duration::from_millis(self.options.cooldown_ms);
        let guard = Duration::from_millis(self.options.recent_guard_ms);
        let record = self
            .doors
            .get_mut(id)
            .ok_or_else(|| ControlError::UnknownDoor(id.to_owned()))?;
        if record.cooldown.is_some() {
            return Err(ControlError::DoorCoolingDown(id.to_owned()));
        }

        if let Err(e) = ctx.runtime.emit(&self.options.open_event, id) {
            log::warn!("failed to open door `{id}`: {e}");
            record.cooldown = None;
            return Err(e.into());
        }

        record.open = true;
        record.cooldown = Some(ctx.timers.schedule(
            ctx.now,
            cooldown,
            DoorTimer::Cooldown(id.to_owned()),
        ));
        if cause == OpenCause::Proximity {
            ctx.arbiter.set(ArbiterFlag::AutoDoorOpening);
        }
        self.recently_opened = true;
        let _ = ctx.timers.schedule(ctx.now, guard, DoorTimer::RecentGuard);
        log::info!("door `{id}` opened ({cause:?})");
        Ok(())
    }

    /// Release a door's cooldown lock before it runs out. Returns whether a
    /// lock was held. Clears the automatic-opening flag once no door is
    /// cooling down.
    pub fn clear_cooldown(
        &mut self,
        id: &str,
        timers: &mut TimerQueue<DoorTimer>,
        arbiter: &mut InteractionArbiter,
    ) -> Result<bool, ControlError> {
        let record = self
            .doors
            .get_mut(id)
            .ok_or_else(|| ControlError::UnknownDoor(id.to_owned()))?;
        let Some(timer) = record.cooldown.take() else {
            return Ok(false);
        };
        let _ = timers.cancel(timer);
        self.release_auto_opening(arbiter);
        log::debug!("door `{id}` cooldown cleared");
        Ok(true)
    }

    /// Close a door. The cooldown lock is left alone.
    pub fn close_door(
        &mut self,
        id: &str,
        runtime: &mut dyn SceneRuntime,
    ) -> Result<(), ControlError> {
        let record = self
            .doors
            .get_mut(id)
            .ok_or_else(|| ControlError::UnknownDoor(id.to_owned()))?;
        runtime.emit(&self.options.close_event, id)?;
        record.open = false;
        log::info!("door `{id}` closed");
        Ok(())
    }

    /// Open every eligible door if the camera is walking forward through the
    /// trigger band on the terrace. Returns how many opened.
    pub fn check_proximity(
        &mut self,
        approach: Approach,
        ctx: &mut DoorContext<'_>,
    ) -> usize {
        let in_band = approach.depth > self.door_threshold
            && approach.depth <= self.door_trigger;
        if approach.direction != Direction::Forward
            || approach.zone != Zone::Terrace
            || !in_band
            || self.recently_opened
        {
            return 0;
        }

        let eligible: Vec<String> = self
            .order
            .iter()
            .filter(|id| !self.is_open(id) && !self.is_cooling_down(id))
            .cloned()
            .collect();
        eligible
            .iter()
            .filter(|id| {
                self.trigger_door(id, OpenCause::Proximity, ctx).is_ok()
            })
            .count()
    }

    /// Apply an expired door timer.
    pub fn on_timer(&mut self, timer: &DoorTimer, arbiter: &mut InteractionArbiter) {
        match timer {
            DoorTimer::Cooldown(id) => {
                if let Some(record) = self.doors.get_mut(id.as_str()) {
                    record.cooldown = None;
                }
                self.release_auto_opening(arbiter);
                log::debug!("door `{id}` cooldown elapsed");
            }
            DoorTimer::RecentGuard => self.recently_opened = false,
        }
    }

    fn release_auto_opening(&self, arbiter: &mut InteractionArbiter) {
        if self.doors.values().all(|d| d.cooldown.is_none()) {
            arbiter.clear(ArbiterFlag::AutoDoorOpening);
        }
    }

    /// Forget all open flags, locks, and guards.
    pub fn reset(&mut self) {
        for record in self.doors.values_mut() {
            *record = DoorRecord::default();
        }
        self.recently_opened = false;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::runtime::MemoryScene;

    struct Fixture {
        doors: DoorCoordinator,
        scene: MemoryScene,
        timers: TimerQueue<DoorTimer>,
        arbiter: InteractionArbiter,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                doors: DoorCoordinator::new(
                    &DoorOptions::default(),
                    &MotionOptions::default(),
                ),
                scene: MemoryScene::new().with_object("front_door", Vec3::ZERO),
                timers: TimerQueue::new(),
                arbiter: InteractionArbiter::new(),
            }
        }

        fn trigger(&mut self, now: Instant) -> Result<(), ControlError> {
            let mut ctx = DoorContext {
                runtime: &mut self.scene,
                timers: &mut self.timers,
                arbiter: &mut self.arbiter,
                now,
            };
            self.doors.trigger_door("front_door", OpenCause::Manual, &mut ctx)
        }

        fn approach(&mut self, depth: f32, now: Instant) -> usize {
            let mut ctx = DoorContext {
                runtime: &mut self.scene,
                timers: &mut self.timers,
                arbiter: &mut self.arbiter,
                now,
            };
            self.doors.check_proximity(
                Approach {
                    depth,
                    direction: Direction::Forward,
                    zone: Zone::Terrace,
                },
                &mut ctx,
            )
        }

        fn advance(&mut self, now: Instant) {
            for timer in self.timers.drain_due(now) {
                self.doors.on_timer(&timer, &mut self.arbiter);
            }
        }
    }

    #[test]
    fn cooldown_blocks_second_open() {
        let t0 = Instant::now();
        let mut f = Fixture::new();
        f.trigger(t0).unwrap();
        assert!(matches!(
            f.trigger(t0 + Duration::from_millis(100)),
            Err(ControlError::DoorCoolingDown(_))
        ));
        assert_eq!(f.scene.count_emitted("open", "front_door"), 1);

        f.advance(t0 + Duration::from_millis(5000));
        assert!(!f.doors.is_cooling_down("front_door"));
        // Still open, but only the lock is checked
        assert!(f.doors.is_open("front_door"));
        f.trigger(t0 + Duration::from_millis(5001)).unwrap();
        assert_eq!(f.scene.count_emitted("open", "front_door"), 2);
    }

    #[test]
    fn emit_failure_leaves_door_retryable() {
        let t0 = Instant::now();
        let mut f = Fixture::new();
        f.scene.set_reject_emits(true);
        assert!(matches!(f.trigger(t0), Err(ControlError::Emit(_))));
        assert!(!f.doors.is_open("front_door"));
        assert!(!f.doors.is_cooling_down("front_door"));
        assert!(f.timers.is_empty());

        f.scene.set_reject_emits(false);
        f.trigger(t0).unwrap();
        assert!(f.doors.is_open("front_door"));
    }

    #[test]
    fn proximity_fires_only_inside_band() {
        let t0 = Instant::now();
        let mut f = Fixture::new();
        assert_eq!(f.approach(151.0, t0), 0);
        assert_eq!(f.approach(0.0, t0), 0);
        assert_eq!(f.approach(150.0, t0), 1);
        assert!(f.arbiter.is_set(ArbiterFlag::AutoDoorOpening, t0));
        // Open and locked: nothing further
        assert_eq!(f.approach(100.0, t0 + Duration::from_millis(16)), 0);

        f.advance(t0 + Duration::from_millis(5000));
        assert!(!f.arbiter.is_set(ArbiterFlag::AutoDoorOpening, t0));
        // Unlocked, but the door is still open
        assert_eq!(f.approach(100.0, t0 + Duration::from_millis(5001)), 0);
    }

    #[test]
    fn backward_travel_never_opens() {
        let t0 = Instant::now();
        let mut f = Fixture::new();
        let mut ctx = DoorContext {
            runtime: &mut f.scene,
            timers: &mut f.timers,
            arbiter: &mut f.arbiter,
            now: t0,
        };
        let opened = f.doors.check_proximity(
            Approach {
                depth: 100.0,
                direction: Direction::Backward,
                zone: Zone::Terrace,
            },
            &mut ctx,
        );
        assert_eq!(opened, 0);
    }

    #[test]
    fn cleared_cooldown_unlocks_without_waiting() {
        let t0 = Instant::now();
        let mut f = Fixture::new();
        assert_eq!(f.approach(150.0, t0), 1);
        assert!(f.arbiter.is_set(ArbiterFlag::AutoDoorOpening, t0));

        let cleared = f
            .doors
            .clear_cooldown("front_door", &mut f.timers, &mut f.arbiter)
            .unwrap();
        assert!(cleared);
        assert!(!f.doors.is_cooling_down("front_door"));
        assert!(!f.arbiter.is_set(ArbiterFlag::AutoDoorOpening, t0));
        // Nothing left to clear, and the cancelled cooldown never fires
        assert!(!f
            .doors
            .clear_cooldown("front_door", &mut f.timers, &mut f.arbiter)
            .unwrap());
        f.advance(t0 + Duration::from_millis(5000));
        assert!(f.timers.is_empty());

        f.trigger(t0 + Duration::from_millis(5001)).unwrap();
        assert_eq!(f.scene.count_emitted("open", "front_door"), 2);
        assert!(matches!(
            f.doors.clear_cooldown("back_door", &mut f.timers, &mut f.arbiter),
            Err(ControlError::UnknownDoor(_))
        ));
    }

    #[test]
    fn closing_clears_open_flag() {
        let t0 = Instant::now();
        let mut f = Fixture::new();
        f.trigger(t0).unwrap();
        f.doors.close_door("front_door", &mut f.scene).unwrap();
        assert!(!f.doors.is_open("front_door"));
        assert_eq!(f.scene.count_emitted("close", "front_door"), 1);
        assert!(matches!(
            f.doors.close_door("back_door", &mut f.scene),
            Err(ControlError::UnknownDoor(_))
        ));
    }
}
