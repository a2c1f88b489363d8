//! The walkthrough controller and its public API.

mod accessors;
mod control;
mod doors;
mod frame;
mod input;

use std::time::Duration;

use glam::Vec3;

pub use self::frame::FrameStatus;
use crate::animation::{CameraTransition, InertiaEngine};
use crate::camera::{
    CameraTransform, DepthRail, Direction, MotionTargets, ZoneState,
};
use crate::control::{
    InteractionArbiter, SavedCameraSnapshot, SuspensionManager,
};
use crate::door::{DoorCoordinator, DoorTimer};
use crate::error::ControlError;
use crate::input::{GestureState, InputCapabilities, InputNormalizer};
use crate::options::Options;
use crate::runtime::SceneRuntime;
use crate::scheduler::{FrameHandle, FrameScheduler, TimerQueue};

/// Duration of the eased return triggered by the return-from-showcase key.
pub const DEFAULT_RETURN_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Uninitialized,
    Running,
    TornDown,
}

/// First-person walkthrough camera controller.
///
/// Owns the camera's logical transform and everything that moves it: the
/// depth rail, zone gating, pointer and touch look, swipe inertia,
/// suspend/restore, explicit `animate_to` moves, and door triggering.
///
/// # Construction
///
/// Build with [`WalkController::new`], then hand the host scene to
/// [`initialize`](Self::initialize). Every other operation fails with
/// [`ControlError::MissingHandle`] until then and after
/// [`teardown`](Self::teardown).
///
/// # Frame loop
///
/// The controller requests frames from the injected [`FrameScheduler`] and
/// expects the host to call [`on_frame`](Self::on_frame) with the handle
/// once the display refreshes. Input is forwarded as it arrives via
/// [`handle_input`](Self::handle_input) or the per-device methods.
///
/// # Example
///
/// ```ignore
/// let mut controller = WalkController::new(
///     Options::default(),
///     InputCapabilities::desktop(),
///     (1280.0, 720.0),
///     Box::new(ManualScheduler::new()),
/// )?;
/// controller.initialize(&mut scene)?;
/// controller.handle_input(&RawInput::Wheel(wheel))?;
/// if let Some(frame) = controller.pending_frame() {
///     controller.on_frame(frame, Instant::now(), &mut scene)?;
/// }
/// ```
pub struct WalkController {
    /// Tunables, read-only after construction.
    options: Options,
    /// Device capabilities resolved by the host.
    capabilities: InputCapabilities,
    /// Display-refresh scheduler.
    scheduler: Box<dyn FrameScheduler>,
    /// The one outstanding frame request.
    pending_frame: Option<FrameHandle>,
    lifecycle: Lifecycle,

    /// Logical camera transform, written to the host camera every frame.
    transform: CameraTransform,
    /// What the integration loop eases toward.
    targets: MotionTargets,
    direction: Direction,
    zone: ZoneState,
    rail: DepthRail,
    /// Rail start; lateral offsets are measured from its x.
    initial_position: Vec3,

    normalizer: InputNormalizer,
    /// Active single-contact gesture, if any.
    gesture: Option<GestureState>,
    inertia: InertiaEngine,

    control: SuspensionManager,
    arbiter: InteractionArbiter,
    doors: DoorCoordinator,
    timers: TimerQueue<DoorTimer>,
    /// Running `animate_to` move.
    animation: Option<CameraTransition>,
}

// =============================================================================
// Core
// =============================================================================

impl WalkController {
    /// Controller for a viewport of `viewport` (width, height) pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::InvalidOptions`] if the options fail
    /// validation.
    pub fn new(
        options: Options,
        capabilities: InputCapabilities,
        viewport: (f32, f32),
        scheduler: Box<dyn FrameScheduler>,
    ) -> Result<Self, ControlError> {
        options.validate()?;

        let rail = DepthRail::from_options(&options.motion);
        let [x, y, z] = options.camera.initial_position;
        let initial_position = Vec3::new(x, y, rail.clamp(z));
        let direction = Direction::default();
        let transform = CameraTransform::new(
            initial_position,
            Vec3::new(0.0, direction.base_yaw(), 0.0),
        );
        let zone =
            ZoneState::at_depth(transform.depth(), options.motion.door_threshold);

        Ok(Self {
            normalizer: InputNormalizer::new(
                &options.input,
                viewport.0,
                viewport.1,
            ),
            inertia: InertiaEngine::new(&options.input),
            doors: DoorCoordinator::new(&options.doors, &options.motion),
            options,
            capabilities,
            scheduler,
            pending_frame: None,
            lifecycle: Lifecycle::Uninitialized,
            transform,
            targets: MotionTargets::at(&transform),
            direction,
            zone,
            rail,
            initial_position,
            gesture: None,
            control: SuspensionManager::new(),
            arbiter: InteractionArbiter::new(),
            timers: TimerQueue::new(),
            animation: None,
        })
    }

    /// Attach to the host camera: place it at the rail start and request the
    /// first frame. Calling it again re-seats the camera on the current
    /// transform.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::MissingHandle`] if the scene has no camera or
    /// the controller was torn down.
    pub fn initialize(
        &mut self,
        runtime: &mut dyn SceneRuntime,
    ) -> Result<(), ControlError> {
        if self.lifecycle == Lifecycle::TornDown {
            return Err(ControlError::MissingHandle);
        }
        let camera = runtime.camera_mut().ok_or(ControlError::MissingHandle)?;
        *camera = self.transform;

        self.lifecycle = Lifecycle::Running;
        if self.pending_frame.is_none() {
            self.pending_frame = Some(self.scheduler.request_frame());
        }
        log::info!(
            "walk controller initialized at depth {:.1} ({:?})",
            self.transform.depth(),
            self.zone.current
        );
        Ok(())
    }

    /// Cancel the frame loop and every timer. All later operations return
    /// [`ControlError::MissingHandle`].
    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.timers.clear();
        self.inertia.cancel();
        self.abandon_gesture();
        self.animation = None;
        self.control.reset();
        self.arbiter.reset();
        self.doors.reset();
        self.lifecycle = Lifecycle::TornDown;
        log::info!("walk controller torn down");
    }

    fn ensure_running(&self) -> Result<(), ControlError> {
        match self.lifecycle {
            Lifecycle::Running => Ok(()),
            Lifecycle::Uninitialized | Lifecycle::TornDown => {
                Err(ControlError::MissingHandle)
            }
        }
    }

    fn ensure_active(&self) -> Result<(), ControlError> {
        self.ensure_running()?;
        if self.control.is_active() {
            Ok(())
        } else {
            Err(ControlError::Inactive)
        }
    }

    /// Snapshot of everything a restore puts back.
    fn snapshot(&self) -> SavedCameraSnapshot {
        SavedCameraSnapshot {
            transform: self.transform,
            targets: self.targets,
            direction: self.direction,
            zone: self.zone,
        }
    }

    /// Put the logical state back exactly as saved. The first-turn flag only
    /// ever goes from unset to set.
    fn apply_snapshot(&mut self, snapshot: SavedCameraSnapshot) {
        let turned = self.zone.has_performed_first_turn;
        self.transform = snapshot.transform;
        self.targets = snapshot.targets;
        self.direction = snapshot.direction;
        self.zone = snapshot.zone;
        self.zone.has_performed_first_turn |= turned;
    }
}

impl std::fmt::Debug for WalkController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalkController")
            .field("lifecycle", &self.lifecycle)
            .field("state", &self.control.state())
            .field("transform", &self.transform)
            .field("direction", &self.direction)
            .field("zone", &self.zone)
            .field("pending_frame", &self.pending_frame)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use web_time::Instant;

    use super::{FrameStatus, WalkController};
    use crate::input::InputCapabilities;
    use crate::options::Options;
    use crate::runtime::MemoryScene;
    use crate::scheduler::ManualScheduler;

    pub(crate) fn controller_with(options: Options) -> (WalkController, MemoryScene) {
        controller_on(options, InputCapabilities::desktop())
    }

    pub(crate) fn controller_on(
        options: Options,
        capabilities: InputCapabilities,
    ) -> (WalkController, MemoryScene) {
        let mut scene = MemoryScene::new()
            .with_object("front_door", glam::Vec3::new(0.0, 0.0, 0.0));
        let mut controller = WalkController::new(
            options,
            capabilities,
            (1000.0, 500.0),
            Box::new(ManualScheduler::new()),
        )
        .unwrap();
        controller.initialize(&mut scene).unwrap();
        (controller, scene)
    }

    pub(crate) fn controller() -> (WalkController, MemoryScene) {
        controller_with(Options::default())
    }

    pub(crate) fn frame(
        controller: &mut WalkController,
        scene: &mut MemoryScene,
        now: Instant,
    ) -> FrameStatus {
        let handle = controller.pending_frame().unwrap();
        controller.on_frame(handle, now, scene).unwrap()
    }
}
