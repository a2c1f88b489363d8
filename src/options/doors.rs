use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Doors", inline)]
#[serde(default)]
/// Door ids, emitted event names, and re-trigger timing.
pub struct DoorOptions {
    /// Scene object ids opened when the camera approaches the threshold.
    #[schemars(skip)]
    pub ids: Vec<String>,
    /// Event name emitted to open a door.
    #[schemars(skip)]
    pub open_event: String,
    /// Event name emitted to close a door.
    #[schemars(skip)]
    pub close_event: String,
    /// Lock duration after a door opens, in milliseconds.
    #[schemars(title = "Cooldown (ms)", range(min = 0, max = 20000))]
    pub cooldown_ms: u64,
    /// Shorter guard against re-triggering near the boundary, in milliseconds.
    #[schemars(skip)]
    pub recent_guard_ms: u64,
}

impl Default for DoorOptions {
    fn default() -> Self {
        Self {
            ids: vec!["front_door".into()],
            open_event: "open".into(),
            close_event: "close".into(),
            cooldown_ms: 5000,
            recent_guard_ms: 1500,
        }
    }
}
