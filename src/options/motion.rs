use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Depth rail bounds, door depths, and travel speeds.
///
/// Forward travel decreases depth: the terrace lies above `door_threshold`,
/// the interior below it, and `door_trigger` sits on the terrace side of the
/// threshold so the door is reached first when walking in.
pub struct MotionOptions {
    /// Depth units travelled per unit of wheel delta.
    #[schemars(title = "Scroll Speed", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub scroll_speed: f32,
    /// Speed multiplier applied while on the terrace.
    #[schemars(title = "Terrace Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub terrace_speed_multiplier: f32,
    /// Interior end of the rail.
    #[schemars(skip)]
    pub min_z: f32,
    /// Terrace end of the rail.
    #[schemars(skip)]
    pub max_z: f32,
    /// Depth separating terrace (above) from interior (at or below).
    #[schemars(skip)]
    pub door_threshold: f32,
    /// Depth at which the door starts opening on the way in.
    #[schemars(skip)]
    pub door_trigger: f32,
    /// Distance from `min_z` within which a reversal counts as the first turn.
    #[schemars(skip)]
    pub first_turn_margin: f32,
    /// Distance travelled per discrete navigation button press.
    #[schemars(title = "Button Step", range(min = 10.0, max = 500.0), extend("step" = 10.0))]
    pub button_step: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            scroll_speed: 0.5,
            terrace_speed_multiplier: 1.5,
            min_z: -500.0,
            max_z: 500.0,
            door_threshold: 0.0,
            door_trigger: 150.0,
            first_turn_margin: 40.0,
            button_step: 120.0,
        }
    }
}
