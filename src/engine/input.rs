//! Input methods for [`WalkController`]

use std::time::Duration;

use glam::{Vec2, Vec3};
use web_time::Instant;

use super::{WalkController, DEFAULT_RETURN_DURATION};
use crate::camera::{RailStep, Zone};
use crate::control::ArbiterFlag;
use crate::error::ControlError;
use crate::input::{
    GestureAxis, GestureState, NavAction, NavButton, PointerEvent, RawInput,
    TouchEvent, TouchPhase, WheelEvent,
};

// ── Unified input handler ──

impl WalkController {
    /// Process a platform-agnostic input event.
    ///
    /// Hosts forward native events as [`RawInput`] variants; the controller
    /// dispatches to pointer look, touch gestures, wheel walking or button
    /// steps. Errors mean the event was discarded and can usually be
    /// ignored.
    ///
    /// # Example
    ///
    /// ```ignore
    /// controller.handle_input(&RawInput::Wheel(WheelEvent { delta_y, timestamp }))?;
    /// ```
    pub fn handle_input(&mut self, event: &RawInput) -> Result<(), ControlError> {
        match event {
            RawInput::PointerMove(e) => self.on_pointer_move(e),
            RawInput::TouchStart(e) => self.on_touch_start(e),
            RawInput::TouchMove(e) => self.on_touch_move(e),
            RawInput::TouchEnd(e) => self.on_touch_end(e).map(|_| ()),
            RawInput::TouchCancel { .. } => {
                self.on_touch_cancel();
                Ok(())
            }
            RawInput::Wheel(e) => self.on_wheel(e).map(|_| ()),
            RawInput::Button { button, timestamp } => {
                self.on_button(*button, *timestamp).map(|_| ())
            }
        }
    }

    /// Dispatch a key by its bound [`NavAction`]. Returns `false` for
    /// unbound keys.
    pub fn handle_key_press(
        &mut self,
        key: &str,
        now: Instant,
    ) -> Result<bool, ControlError> {
        let Some(action) = self.options.keybindings.lookup(key) else {
            return Ok(false);
        };
        log::debug!("key `{key}` -> {action:?}");
        match action {
            NavAction::StepForward => {
                self.on_button(NavButton::Forward, now).map(|_| true)
            }
            NavAction::StepBackward => {
                self.on_button(NavButton::Backward, now).map(|_| true)
            }
            NavAction::TurnAround => self.turn_around(),
            NavAction::ReturnFromShowcase => self
                .dismiss_showcase(DEFAULT_RETURN_DURATION, now)
                .map(|_| true),
        }
    }
}

// ── Walking ──

impl WalkController {
    /// Walk by a wheel delta scaled by the scroll speed.
    pub fn on_wheel(&mut self, event: &WheelEvent) -> Result<RailStep, ControlError> {
        self.ensure_active()?;
        let motion = self.normalizer.normalize_wheel(event);
        Ok(self.walk(motion.delta.y * self.options.motion.scroll_speed))
    }

    /// Walk one discrete step.
    pub fn on_button(
        &mut self,
        button: NavButton,
        timestamp: Instant,
    ) -> Result<RailStep, ControlError> {
        self.ensure_active()?;
        let motion = self.normalizer.normalize_button(button, timestamp);
        Ok(self.walk(motion.delta.y * self.options.motion.button_step))
    }

    /// Walk `distance` along the travel direction (negative walks back).
    ///
    /// The terrace speed multiplier applies while on the terrace. Walking
    /// into the rail end ahead turns the camera around where reversal is
    /// allowed.
    pub fn move_by(&mut self, distance: f32) -> Result<RailStep, ControlError> {
        self.ensure_active()?;
        Ok(self.walk(distance))
    }

    /// Reverse the travel direction in place. Returns `false` where reversal
    /// is not allowed (the terrace before the first turn).
    pub fn turn_around(&mut self) -> Result<bool, ControlError> {
        self.ensure_active()?;
        if !self.zone.allows_reversal() {
            return Ok(false);
        }
        self.reverse_direction(self.transform.depth());
        Ok(true)
    }

    pub(super) fn walk(&mut self, distance: f32) -> RailStep {
        let distance = if self.zone.current == Zone::Terrace {
            distance * self.options.motion.terrace_speed_multiplier
        } else {
            distance
        };
        // Reversal is decided from where the camera is, not where the
        // smoothed target has already run ahead to.
        let actual = self.rail.advance(
            self.transform.depth(),
            distance,
            self.direction,
            &self.zone,
        );
        if actual.flipped {
            self.reverse_direction(actual.depth);
            return actual;
        }
        let step = self.rail.advance(
            self.targets.position.z,
            distance,
            self.direction,
            &self.zone,
        );
        self.targets.position.z = step.depth;
        RailStep {
            flipped: false,
            ..step
        }
    }

    /// Flip the direction and face along it. The depth target snaps to where
    /// the camera actually is, so excess motion past the end is dropped.
    /// `at` is the depth the reversal counts at for the first-turn check.
    fn reverse_direction(&mut self, at: f32) {
        let depth = self.transform.depth();
        if self.zone.record_reversal(
            at,
            self.rail.min_z,
            self.options.motion.first_turn_margin,
        ) {
            log::info!("first turn at depth {at:.1}; terrace look unlocked");
        }
        self.direction = self.direction.reversed();
        self.targets.rotation = Vec3::new(0.0, self.direction.base_yaw(), 0.0);
        self.targets.position.z = self.rail.clamp(depth);
        self.inertia.cancel();
        log::debug!("direction reversed to {:?} at {depth:.1}", self.direction);
    }
}

// ── Pointer look ──

impl WalkController {
    /// Hover look: yaw, pitch, and a lateral offset follow the cursor.
    /// Ignored on the terrace before the first turn and while a touch swipe
    /// owns the view.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> Result<(), ControlError> {
        self.ensure_active()?;
        if self.arbiter.is_set(ArbiterFlag::SwipeActive, event.timestamp) {
            log::trace!("pointer move ignored during swipe");
            return Err(ControlError::InvalidGesture);
        }
        let motion = self.normalizer.normalize_pointer(event)?;
        if self.zone.allows_look() {
            self.apply_look(motion.normalized);
        }
        Ok(())
    }

    fn apply_look(&mut self, normalized: Vec2) {
        let camera = &self.options.camera;
        let max_side = camera.max_side_rotation();
        let max_vertical = camera.max_vertical_rotation();

        let yaw = self.direction.base_yaw()
            - normalized.x * max_side * camera.mouse_sensitivity;
        let pitch = -normalized.y * max_vertical * camera.mouse_sensitivity;
        let lateral = self.initial_position.x
            + normalized.x * camera.max_lateral_offset * self.direction.sign();

        self.targets.rotation.y = self.clamp_yaw(yaw);
        self.targets.rotation.x = pitch.clamp(-max_vertical, max_vertical);
        self.targets.position.x = lateral;
    }

    /// Clamp a yaw to the side-rotation limit around the travel direction.
    pub(super) fn clamp_yaw(&self, yaw: f32) -> f32 {
        let base = self.direction.base_yaw();
        let max_side = self.options.camera.max_side_rotation();
        yaw.clamp(base - max_side, base + max_side)
    }

    /// Radians of yaw per horizontal swipe pixel, signed by the configured
    /// swipe direction.
    pub(super) fn swipe_gain(&self) -> f32 {
        let input = &self.options.input;
        input.radians_per_pixel(self.normalizer.viewport().x) * input.swipe.sign()
    }
}

// ── Touch gestures ──

impl WalkController {
    /// A finger landed. Cancels inertia; a second finger abandons the
    /// gesture.
    pub fn on_touch_start(&mut self, event: &TouchEvent) -> Result<(), ControlError> {
        self.ensure_active()?;
        self.inertia.cancel();
        match self.normalizer.normalize_touch(TouchPhase::Start, event) {
            Ok(motion) => {
                self.gesture = Some(GestureState::new(
                    motion.position,
                    event.timestamp,
                    self.targets.rotation.y,
                    self.options.input.velocity_smoothing,
                ));
                Ok(())
            }
            Err(e) => {
                self.abandon_gesture();
                Err(e)
            }
        }
    }

    /// The finger moved. Horizontal swipes turn the view from the yaw at
    /// gesture start; vertical drags walk (finger up walks forward).
    pub fn on_touch_move(&mut self, event: &TouchEvent) -> Result<(), ControlError> {
        self.ensure_active()?;
        let motion = match self.normalizer.normalize_touch(TouchPhase::Move, event) {
            Ok(motion) => motion,
            Err(e) => {
                self.abandon_gesture();
                return Err(e);
            }
        };
        let lock = self.options.input.axis_lock_distance;
        let gesture = self.gesture.as_mut().ok_or(ControlError::InvalidGesture)?;
        let travel = gesture.update(motion.position, event.timestamp, lock);
        let (axis, total_x, anchor) =
            (gesture.axis(), gesture.total().x, gesture.initial_rotation_y);

        match axis {
            GestureAxis::Horizontal => {
                let timeout = Duration::from_millis(
                    self.options.input.swipe_flag_timeout_ms,
                );
                self.arbiter.set_for(
                    ArbiterFlag::SwipeActive,
                    event.timestamp,
                    timeout,
                );
                if self.zone.allows_look() {
                    let yaw = anchor + total_x * self.swipe_gain();
                    self.targets.rotation.y = self.clamp_yaw(yaw);
                }
            }
            GestureAxis::Vertical => {
                let _ = self.walk(-travel.y * self.options.input.touch_move_speed);
            }
            GestureAxis::Undecided => {}
        }
        Ok(())
    }

    /// The finger lifted. A fast enough horizontal swipe hands its velocity
    /// to inertia; returns whether inertia started.
    pub fn on_touch_end(&mut self, event: &TouchEvent) -> Result<bool, ControlError> {
        self.ensure_active()?;
        let ended = self.normalizer.normalize_touch(TouchPhase::End, event);
        let gesture = self.gesture.take();
        self.arbiter.clear(ArbiterFlag::SwipeActive);
        let end = ended?;
        let gesture = gesture.ok_or(ControlError::InvalidGesture)?;

        let input = &self.options.input;
        let velocity = gesture.velocity().x;
        let qualifies = input.inertia_enabled
            && gesture.axis() == GestureAxis::Horizontal
            && gesture.total().x.abs() > input.min_swipe_distance
            && velocity.abs() > input.min_release_velocity
            && self.zone.allows_look();
        if qualifies {
            log::debug!("swipe released at {velocity:.3} px/ms; coasting");
            self.inertia.start(velocity, end.timestamp);
        }
        Ok(qualifies)
    }

    /// The host cancelled the touch sequence.
    pub fn on_touch_cancel(&mut self) {
        self.abandon_gesture();
    }

    pub(super) fn abandon_gesture(&mut self) {
        self.gesture = None;
        self.normalizer.cancel_touch();
        self.arbiter.clear(ArbiterFlag::SwipeActive);
    }
}
