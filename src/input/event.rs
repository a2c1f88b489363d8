//! Platform-agnostic input events.
//!
//! Hosts translate their native pointer, touch, wheel and button events into
//! these types and hand them to the [`WalkController`](crate::WalkController).
//! The [`InputNormalizer`](super::InputNormalizer) turns them into a single
//! canonical [`MotionEvent`].
//!
//! # Example
//!
//! ```ignore
//! controller.on_pointer_move(&PointerEvent {
//!     x: 640.0,
//!     y: 360.0,
//!     source: PointerSource::Mouse,
//!     timestamp: Instant::now(),
//! })?;
//! ```

use glam::Vec2;
use web_time::Instant;

/// Which physical device produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// A mouse or trackpad cursor.
    Mouse,
    /// A stylus.
    Pen,
    /// A pointer event synthesized from a touch contact.
    Touch,
}

/// Pointer (cursor) movement in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Horizontal position in physical pixels.
    pub x: f32,
    /// Vertical position in physical pixels (down is positive).
    pub y: f32,
    /// Originating device.
    pub source: PointerSource,
    /// When the event was delivered.
    pub timestamp: Instant,
}

/// One touch contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Host-assigned contact identifier.
    pub id: u64,
    /// Horizontal position in physical pixels.
    pub x: f32,
    /// Vertical position in physical pixels.
    pub y: f32,
}

impl TouchPoint {
    /// Position as a vector.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Touch start/move/end payload.
///
/// For start and move, `touches` holds every active contact. For end, it
/// holds the contacts that were lifted (empty when the host does not report
/// them).
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    /// Contacts carried by the event.
    pub touches: Vec<TouchPoint>,
    /// When the event was delivered.
    pub timestamp: Instant,
}

/// Scroll wheel movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Vertical scroll amount; positive scrolls down (walks forward).
    pub delta_y: f32,
    /// When the event was delivered.
    pub timestamp: Instant,
}

/// On-screen discrete navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavButton {
    /// Walk one step along the travel direction.
    Forward,
    /// Walk one step against the travel direction.
    Backward,
}

impl NavButton {
    /// Step sign: `+1` for forward, `-1` for backward.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Any raw input the controller understands.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Cursor moved.
    PointerMove(PointerEvent),
    /// Finger(s) touched down.
    TouchStart(TouchEvent),
    /// Finger(s) moved.
    TouchMove(TouchEvent),
    /// Finger(s) lifted.
    TouchEnd(TouchEvent),
    /// The host cancelled the touch sequence.
    TouchCancel {
        /// When the event was delivered.
        timestamp: Instant,
    },
    /// Scroll wheel.
    Wheel(WheelEvent),
    /// Discrete navigation button pressed.
    Button {
        /// Which button.
        button: NavButton,
        /// When the event was delivered.
        timestamp: Instant,
    },
}

/// Device capabilities resolved once by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputCapabilities {
    /// Whether the primary pointer is a touch screen.
    pub is_touch_primary: bool,
}

impl InputCapabilities {
    /// Desktop-style capabilities (mouse primary).
    #[must_use]
    pub fn desktop() -> Self {
        Self {
            is_touch_primary: false,
        }
    }

    /// Touch-first capabilities.
    #[must_use]
    pub fn touch() -> Self {
        Self {
            is_touch_primary: true,
        }
    }
}

/// Device family of a canonical motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Mouse, trackpad or pen cursor.
    Mouse,
    /// Single-finger touch.
    Touch,
    /// Scroll wheel.
    Wheel,
    /// Discrete navigation button or key.
    Button,
}

/// What the user is doing with the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// Cursor moving without a press.
    Hover,
    /// A drag gesture began.
    GestureStart,
    /// A drag gesture continued.
    GestureMove,
    /// A drag gesture ended.
    GestureEnd,
    /// Continuous scroll.
    Scroll,
    /// Discrete step.
    Step,
}

/// Canonical motion event produced by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionEvent {
    /// Viewport position mapped to `[-1, 1]` and passed through the response
    /// curve. Zero for wheel and button events.
    pub normalized: Vec2,
    /// Raw position in physical pixels (last known position for gesture
    /// ends, zero for wheel and button events).
    pub position: Vec2,
    /// Pixel delta since the previous event of the same device (wheel delta
    /// or step sign on the y axis for wheel and button events).
    pub delta: Vec2,
    /// Device family.
    pub device: DeviceKind,
    /// Interaction phase.
    pub interaction: InteractionKind,
    /// When the source event was delivered.
    pub timestamp: Instant,
}
