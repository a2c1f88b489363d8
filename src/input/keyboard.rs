use serde::{Deserialize, Serialize};

/// Navigation actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// step_forward = "ArrowUp"
/// turn_around = "KeyT"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    /// Advance one button step along the travel direction.
    StepForward,
    /// Retreat one button step against the travel direction.
    StepBackward,
    /// Reverse the travel direction in place.
    TurnAround,
    /// Leave a showcase view and return to the saved camera.
    ReturnFromShowcase,
}
