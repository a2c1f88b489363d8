use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Look sensitivity, smoothing, and rotation limits.
pub struct CameraOptions {
    /// Pointer look sensitivity multiplier.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub mouse_sensitivity: f32,
    /// Maximum sideways offset of the camera from the rail, in scene units.
    #[schemars(title = "Lateral Offset", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub max_lateral_offset: f32,
    /// Fraction of the remaining distance covered per frame.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smooth_factor: f32,
    /// Maximum yaw away from the travel direction, in degrees.
    #[schemars(title = "Side Rotation", range(min = 0.0, max = 90.0), extend("step" = 1.0))]
    pub max_side_rotation_deg: f32,
    /// Maximum pitch up or down, in degrees.
    #[schemars(title = "Vertical Rotation", range(min = 0.0, max = 45.0), extend("step" = 1.0))]
    pub max_vertical_rotation_deg: f32,
    /// Camera position at session start.
    #[schemars(skip)]
    pub initial_position: [f32; 3],
    /// Scene object ids whose yaw continuously eases toward the camera.
    #[schemars(skip)]
    pub facing_objects: Vec<String>,
}

impl CameraOptions {
    /// Maximum yaw offset in radians.
    #[must_use]
    pub fn max_side_rotation(&self) -> f32 {
        self.max_side_rotation_deg.to_radians()
    }

    /// Maximum pitch in radians.
    #[must_use]
    pub fn max_vertical_rotation(&self) -> f32 {
        self.max_vertical_rotation_deg.to_radians()
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 1.0,
            max_lateral_offset: 0.6,
            smooth_factor: 0.05,
            max_side_rotation_deg: 35.0,
            max_vertical_rotation_deg: 12.0,
            initial_position: [0.0, 1.6, 300.0],
            facing_objects: Vec::new(),
        }
    }
}
