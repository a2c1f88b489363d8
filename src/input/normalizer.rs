//! Converts raw device events into canonical [`MotionEvent`]s.
//!
//! The normalizer owns only its own bookkeeping (viewport size and the last
//! position seen per device) and never touches camera state. Mouse and touch
//! paths reject each other's events so one physical gesture is never applied
//! twice, and touch accepts exactly one contact point.

use glam::Vec2;
use web_time::Instant;

use super::event::{
    DeviceKind, InteractionKind, MotionEvent, NavButton, PointerEvent,
    PointerSource, TouchEvent, TouchPoint, WheelEvent,
};
use crate::error::ControlError;
use crate::options::InputOptions;

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Contact began.
    Start,
    /// Contact moved.
    Move,
    /// Contact lifted.
    End,
}

/// Power-law response curve: `sign(x) * |x|^k`.
///
/// With `k > 1` small movements near the center are damped and larger ones
/// ramp up, so the view does not twitch around dead-center.
#[inline]
#[must_use]
pub fn response_curve(x: f32, k: f32) -> f32 {
    if x == 0.0 {
        return 0.0;
    }
    x.signum() * x.abs().powf(k)
}

/// Turns raw pointer, touch, wheel, and button events into canonical motion
/// events.
#[derive(Debug, Clone)]
pub struct InputNormalizer {
    viewport: Vec2,
    exponent_x: f32,
    exponent_y: f32,
    last_pointer: Option<Vec2>,
    last_touch: Option<Vec2>,
}

impl InputNormalizer {
    /// Create a normalizer for a viewport of the given size in pixels.
    #[must_use]
    pub fn new(options: &InputOptions, width: f32, height: f32) -> Self {
        Self {
            viewport: Vec2::new(width.max(1.0), height.max(1.0)),
            exponent_x: options.response_exponent_x,
            exponent_y: options.response_exponent_y,
            last_pointer: None,
            last_touch: None,
        }
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Update the viewport after a resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Map a pixel position to `[-1, 1]` on both axes and apply the
    /// response curve.
    #[must_use]
    pub fn normalize_position(&self, position: Vec2) -> Vec2 {
        let unit = (position / self.viewport) * 2.0 - Vec2::ONE;
        let unit = unit.clamp(Vec2::NEG_ONE, Vec2::ONE);
        Vec2::new(
            response_curve(unit.x, self.exponent_x),
            response_curve(unit.y, self.exponent_y),
        )
    }

    /// Normalize a mouse-bound pointer move. Pointer events synthesized from
    /// touch are rejected so the touch handler alone consumes them.
    pub fn normalize_pointer(
        &mut self,
        event: &PointerEvent,
    ) -> Result<MotionEvent, ControlError> {
        if event.source == PointerSource::Touch {
            log::trace!("pointer event from touch rejected by mouse path");
            return Err(ControlError::InvalidGesture);
        }
        if !(event.x.is_finite() && event.y.is_finite()) {
            return Err(ControlError::InvalidGesture);
        }

        let position = Vec2::new(event.x, event.y);
        let delta = self
            .last_pointer
            .map_or(Vec2::ZERO, |last| position - last);
        self.last_pointer = Some(position);

        Ok(MotionEvent {
            normalized: self.normalize_position(position),
            position,
            delta,
            device: DeviceKind::Mouse,
            interaction: InteractionKind::Hover,
            timestamp: event.timestamp,
        })
    }

    /// Normalize a single-contact touch event. Multi-touch is discarded
    /// outright, as are moves and ends with no preceding start.
    pub fn normalize_touch(
        &mut self,
        phase: TouchPhase,
        event: &TouchEvent,
    ) -> Result<MotionEvent, ControlError> {
        match phase {
            TouchPhase::Start => {
                let position = single_contact(event)?;
                self.last_touch = Some(position);
                Ok(self.touch_event(
                    position,
                    Vec2::ZERO,
                    InteractionKind::GestureStart,
                    event.timestamp,
                ))
            }
            TouchPhase::Move => {
                let position = single_contact(event)?;
                let last =
                    self.last_touch.ok_or(ControlError::InvalidGesture)?;
                self.last_touch = Some(position);
                Ok(self.touch_event(
                    position,
                    position - last,
                    InteractionKind::GestureMove,
                    event.timestamp,
                ))
            }
            TouchPhase::End => {
                let last =
                    self.last_touch.take().ok_or(ControlError::InvalidGesture)?;
                if event.touches.len() > 1 {
                    return Err(ControlError::InvalidGesture);
                }
                let position = event
                    .touches
                    .first()
                    .map_or(last, TouchPoint::position);
                Ok(self.touch_event(
                    position,
                    position - last,
                    InteractionKind::GestureEnd,
                    event.timestamp,
                ))
            }
        }
    }

    /// Forget any in-flight touch contact.
    pub fn cancel_touch(&mut self) {
        self.last_touch = None;
    }

    /// Normalize a wheel event. The wheel delta travels on the y axis.
    #[must_use]
    pub fn normalize_wheel(&self, event: &WheelEvent) -> MotionEvent {
        MotionEvent {
            normalized: Vec2::ZERO,
            position: Vec2::ZERO,
            delta: Vec2::new(0.0, event.delta_y),
            device: DeviceKind::Wheel,
            interaction: InteractionKind::Scroll,
            timestamp: event.timestamp,
        }
    }

    /// Normalize a discrete button press. The step sign travels on the y
    /// axis.
    #[must_use]
    pub fn normalize_button(
        &self,
        button: NavButton,
        timestamp: Instant,
    ) -> MotionEvent {
        MotionEvent {
            normalized: Vec2::ZERO,
            position: Vec2::ZERO,
            delta: Vec2::new(0.0, button.sign()),
            device: DeviceKind::Button,
            interaction: InteractionKind::Step,
            timestamp,
        }
    }

    fn touch_event(
        &self,
        position: Vec2,
        delta: Vec2,
        interaction: InteractionKind,
        timestamp: Instant,
    ) -> MotionEvent {
        MotionEvent {
            normalized: self.normalize_position(position),
            position,
            delta,
            device: DeviceKind::Touch,
            interaction,
            timestamp,
        }
    }
}

fn single_contact(event: &TouchEvent) -> Result<Vec2, ControlError> {
    match event.touches.as_slice() {
        [only] if only.x.is_finite() && only.y.is_finite() => {
            Ok(only.position())
        }
        _ => {
            log::trace!(
                "touch with {} contacts discarded",
                event.touches.len()
            );
            Err(ControlError::InvalidGesture)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> InputNormalizer {
        InputNormalizer::new(&InputOptions::default(), 1000.0, 500.0)
    }

    fn touch(points: &[(f32, f32)], timestamp: Instant) -> TouchEvent {
        TouchEvent {
            touches: points
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| TouchPoint { id: i as u64, x, y })
                .collect(),
            timestamp,
        }
    }

    #[test]
    fn response_curve_preserves_sign_and_endpoints() {
        assert_eq!(response_curve(0.0, 1.2), 0.0);
        assert!((response_curve(1.0, 1.2) - 1.0).abs() < 1e-6);
        assert!((response_curve(-1.0, 1.3) + 1.0).abs() < 1e-6);
        let half = response_curve(0.5, 1.2);
        assert!(half > 0.0 && half < 0.5);
        assert!((response_curve(-0.5, 1.2) + half).abs() < 1e-6);
    }

    #[test]
    fn center_maps_to_origin_and_corners_to_unit() {
        let n = normalizer();
        assert_eq!(n.normalize_position(Vec2::new(500.0, 250.0)), Vec2::ZERO);
        let corner = n.normalize_position(Vec2::new(1000.0, 0.0));
        assert!((corner.x - 1.0).abs() < 1e-6);
        assert!((corner.y + 1.0).abs() < 1e-6);
        // Off-screen positions clamp
        let beyond = n.normalize_position(Vec2::new(5000.0, 5000.0));
        assert!((beyond.x - 1.0).abs() < 1e-6);
        assert!((beyond.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn mouse_path_rejects_touch_originated_pointer() {
        let mut n = normalizer();
        let now = Instant::now();
        let ev = PointerEvent {
            x: 10.0,
            y: 10.0,
            source: PointerSource::Touch,
            timestamp: now,
        };
        assert!(matches!(
            n.normalize_pointer(&ev),
            Err(ControlError::InvalidGesture)
        ));
    }

    #[test]
    fn pointer_deltas_follow_previous_position() {
        let mut n = normalizer();
        let now = Instant::now();
        let first = n
            .normalize_pointer(&PointerEvent {
                x: 100.0,
                y: 100.0,
                source: PointerSource::Mouse,
                timestamp: now,
            })
            .unwrap();
        assert_eq!(first.delta, Vec2::ZERO);
        let second = n
            .normalize_pointer(&PointerEvent {
                x: 130.0,
                y: 90.0,
                source: PointerSource::Mouse,
                timestamp: now,
            })
            .unwrap();
        assert_eq!(second.delta, Vec2::new(30.0, -10.0));
        assert_eq!(second.interaction, InteractionKind::Hover);
    }

    #[test]
    fn multi_touch_is_discarded() {
        let mut n = normalizer();
        let now = Instant::now();
        let two = touch(&[(10.0, 10.0), (50.0, 50.0)], now);
        assert!(n.normalize_touch(TouchPhase::Start, &two).is_err());
        // Nothing was recorded, so a move has no anchor either
        let one = touch(&[(20.0, 20.0)], now);
        assert!(n.normalize_touch(TouchPhase::Move, &one).is_err());
    }

    #[test]
    fn multi_contact_end_drops_the_tracked_contact() {
        let mut n = normalizer();
        let now = Instant::now();
        assert!(n
            .normalize_touch(TouchPhase::Start, &touch(&[(100.0, 100.0)], now))
            .is_ok());
        let two = touch(&[(100.0, 100.0), (300.0, 300.0)], now);
        assert!(n.normalize_touch(TouchPhase::End, &two).is_err());
        // No stale anchor survives for a later move or end
        let one = touch(&[(120.0, 100.0)], now);
        assert!(n.normalize_touch(TouchPhase::Move, &one).is_err());
        assert!(n.normalize_touch(TouchPhase::End, &one).is_err());
    }

    #[test]
    fn touch_sequence_tracks_deltas() {
        let mut n = normalizer();
        let now = Instant::now();
        let start = n
            .normalize_touch(TouchPhase::Start, &touch(&[(100.0, 200.0)], now))
            .unwrap();
        assert_eq!(start.interaction, InteractionKind::GestureStart);
        let moved = n
            .normalize_touch(TouchPhase::Move, &touch(&[(125.0, 190.0)], now))
            .unwrap();
        assert_eq!(moved.delta, Vec2::new(25.0, -10.0));
        let end = n
            .normalize_touch(TouchPhase::End, &touch(&[], now))
            .unwrap();
        assert_eq!(end.position, Vec2::new(125.0, 190.0));
        assert_eq!(end.interaction, InteractionKind::GestureEnd);
        // The contact is gone after the end
        assert!(n
            .normalize_touch(TouchPhase::End, &touch(&[], now))
            .is_err());
    }

    #[test]
    fn wheel_and_button_carry_delta_on_y() {
        let n = normalizer();
        let now = Instant::now();
        let wheel = n.normalize_wheel(&WheelEvent {
            delta_y: 42.0,
            timestamp: now,
        });
        assert_eq!(wheel.delta, Vec2::new(0.0, 42.0));
        assert_eq!(wheel.device, DeviceKind::Wheel);
        let step = n.normalize_button(NavButton::Backward, now);
        assert_eq!(step.delta.y, -1.0);
        assert_eq!(step.interaction, InteractionKind::Step);
    }
}
