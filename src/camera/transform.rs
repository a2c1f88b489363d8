use std::f32::consts::PI;

use glam::Vec3;

/// Camera position and Euler rotation (pitch, yaw, roll) in radians.
///
/// Roll (`rotation.z`) is pinned to zero by every constructor and update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// World-space position.
    pub position: Vec3,
    /// Pitch (x), yaw (y), roll (z, always zero).
    pub rotation: Vec3,
}

impl CameraTransform {
    /// Transform from position and rotation, with roll cleared.
    #[must_use]
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::new(rotation.x, rotation.y, 0.0),
        }
    }

    /// Depth along the rail.
    #[must_use]
    pub fn depth(&self) -> f32 {
        self.position.z
    }

    /// Move a fixed fraction of the remaining distance toward `targets`.
    ///
    /// The fraction is applied per call, not per unit of time, so the
    /// apparent speed follows the host's frame rate.
    pub fn ease_toward(&mut self, targets: &MotionTargets, factor: f32) {
        self.position += (targets.position - self.position) * factor;
        self.rotation += (targets.rotation - self.rotation) * factor;
        self.rotation.z = 0.0;
    }

    /// Component-wise interpolation toward `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.position.lerp(other.position, t),
            self.rotation.lerp(other.rotation, t),
        )
    }
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }
}

/// Desired end state the integration loop eases toward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionTargets {
    /// Target position.
    pub position: Vec3,
    /// Target rotation (roll ignored).
    pub rotation: Vec3,
}

impl MotionTargets {
    /// Targets equal to the given transform, so the camera holds still.
    #[must_use]
    pub fn at(transform: &CameraTransform) -> Self {
        Self {
            position: transform.position,
            rotation: transform.rotation,
        }
    }
}

/// Travel direction along the rail.
///
/// Forward travel decreases depth (toward the interior end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Walking in; yaw base angle 0.
    #[default]
    Forward,
    /// Walking out; yaw base angle π.
    Backward,
}

impl Direction {
    /// Signed unit: `+1` forward, `-1` backward.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// Yaw that faces along the direction of travel.
    #[must_use]
    pub fn base_yaw(self) -> f32 {
        match self {
            Self::Forward => 0.0,
            Self::Backward => PI,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}
