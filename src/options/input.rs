use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sign convention for touch swipes.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Content follows the finger: swiping right turns the view left.
    #[default]
    Natural,
    /// Swiping right turns the view right.
    Inverted,
}

impl SwipeDirection {
    /// Multiplier applied to horizontal swipe motion, shared by live drag
    /// and inertia so both phases always turn the same way.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Natural => -1.0,
            Self::Inverted => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Response curve, touch gesture, and inertia tunables.
pub struct InputOptions {
    /// Power-law exponent applied to normalized horizontal coordinates.
    #[schemars(skip)]
    pub response_exponent_x: f32,
    /// Power-law exponent applied to normalized vertical coordinates.
    #[schemars(skip)]
    pub response_exponent_y: f32,
    /// Yaw produced by a swipe across the full viewport width, in degrees.
    #[schemars(title = "Swipe Rotation", range(min = 10.0, max = 360.0), extend("step" = 5.0))]
    pub touch_rotation_range_deg: f32,
    /// Depth units travelled per pixel of vertical drag.
    #[schemars(title = "Drag Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub touch_move_speed: f32,
    /// Travel in pixels before a gesture locks to one axis.
    #[schemars(skip)]
    pub axis_lock_distance: f32,
    /// Swipe sign convention.
    #[schemars(title = "Swipe Direction")]
    pub swipe: SwipeDirection,
    /// Exponential moving average weight kept from the previous velocity.
    #[schemars(skip)]
    pub velocity_smoothing: f32,
    /// Whether released swipes keep rotating.
    #[schemars(title = "Inertia")]
    pub inertia_enabled: bool,
    /// Minimum horizontal travel in pixels for a swipe to seed inertia.
    #[schemars(skip)]
    pub min_swipe_distance: f32,
    /// Minimum release speed in px/ms for a swipe to seed inertia.
    #[schemars(skip)]
    pub min_release_velocity: f32,
    /// Per-frame velocity multiplier while coasting.
    #[schemars(title = "Inertia Damping", range(min = 0.5, max = 0.99), extend("step" = 0.01))]
    pub inertia_damping: f32,
    /// Speed in px/ms below which inertia stops.
    #[schemars(skip)]
    pub inertia_min_velocity: f32,
    /// Hard cap on inertia duration in milliseconds.
    #[schemars(skip)]
    pub inertia_max_duration_ms: u64,
    /// How long the swipe-active flag survives without being refreshed.
    #[schemars(skip)]
    pub swipe_flag_timeout_ms: u64,
}

impl InputOptions {
    /// Yaw in radians per pixel of horizontal swipe on a viewport of the
    /// given width.
    #[must_use]
    pub fn radians_per_pixel(&self, viewport_width: f32) -> f32 {
        self.touch_rotation_range_deg.to_radians() / viewport_width.max(1.0)
    }
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            response_exponent_x: 1.2,
            response_exponent_y: 1.3,
            touch_rotation_range_deg: 90.0,
            touch_move_speed: 1.0,
            axis_lock_distance: 10.0,
            swipe: SwipeDirection::Natural,
            velocity_smoothing: 0.6,
            inertia_enabled: true,
            min_swipe_distance: 30.0,
            min_release_velocity: 0.1,
            inertia_damping: 0.92,
            inertia_min_velocity: 0.02,
            inertia_max_duration_ms: 800,
            swipe_flag_timeout_ms: 300,
        }
    }
}
