//! Time-boxed camera transitions and swipe inertia.

/// Easing curves for transitions.
pub mod easing;
/// Post-release decaying swipe velocity.
pub mod inertia;
/// Eased interpolation between two camera transforms.
pub mod transition;

pub use easing::EasingFunction;
pub use inertia::{InertiaEngine, NOMINAL_FRAME_MS};
pub use transition::{CameraTransition, TransitionSample};
