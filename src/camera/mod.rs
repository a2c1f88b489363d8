//! Camera state for the walkthrough.
//!
//! Holds the transform and its easing targets, the travel direction, depth
//! zones, the depth rail that clamps motion and reverses direction at its
//! ends, and the yaw easing used for scene objects that face the camera.

/// Yaw easing for scene objects that turn toward the camera.
pub mod facing;
/// Depth clamping and direction reversal at the rail ends.
pub mod rail;
/// Camera transform, easing targets, and travel direction.
pub mod transform;
/// Terrace/interior classification and first-turn tracking.
pub mod zone;

pub use facing::{ease_angle, facing_yaw};
pub use rail::{DepthRail, RailStep};
pub use transform::{CameraTransform, Direction, MotionTargets};
pub use zone::{classify, Zone, ZoneState, ZoneTransition};
