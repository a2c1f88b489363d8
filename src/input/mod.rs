//! Input handling: raw device events, the normalizer that turns them into
//! canonical motion events, and per-gesture velocity tracking.

/// Raw device events, capabilities, and the canonical motion event.
pub mod event;
/// Single-contact gesture state with axis locking.
pub mod gesture;
/// Keyboard-bindable navigation actions.
pub mod keyboard;
/// Converts raw events into canonical motion events.
pub mod normalizer;
/// Exponentially smoothed gesture velocity.
pub mod velocity;

pub use event::{
    DeviceKind, InputCapabilities, InteractionKind, MotionEvent, NavButton,
    PointerEvent, PointerSource, RawInput, TouchEvent, TouchPoint, WheelEvent,
};
pub use gesture::{GestureAxis, GestureState};
pub use keyboard::NavAction;
pub use normalizer::{response_curve, InputNormalizer, TouchPhase};
pub use velocity::VelocityTracker;
