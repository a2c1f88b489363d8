use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Yaw that turns an object at `object` to face a camera at `camera`.
#[inline]
#[must_use]
pub fn facing_yaw(camera: Vec3, object: Vec3) -> f32 {
    (camera.x - object.x).atan2(camera.z - object.z)
}

/// Move `current` a fraction of the way toward `target` along the shorter
/// arc.
#[must_use]
pub fn ease_angle(current: f32, target: f32, factor: f32) -> f32 {
    let mut diff = (target - current).rem_euclid(TAU);
    if diff > PI {
        diff -= TAU;
    }
    current + diff * factor
}
