//! Centralized controller tunables with TOML preset support.
//!
//! All tweakable settings (camera look, depth rail, touch and inertia,
//! doors, keybindings) are consolidated here. Options serialize to/from TOML
//! for presets and from JSON for hosts that hand over a plain options object.
//! They are read-only once a controller has been built from them.

mod camera;
mod doors;
mod input;
mod keybindings;
mod motion;

use std::path::Path;

pub use camera::CameraOptions;
pub use doors::DoorOptions;
pub use input::{InputOptions, SwipeDirection};
pub use keybindings::KeybindingOptions;
pub use motion::MotionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ControlError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[motion]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Look sensitivity, smoothing, and rotation limits.
    pub camera: CameraOptions,
    /// Depth rail bounds and travel speeds.
    pub motion: MotionOptions,
    /// Response curve, touch gestures, and inertia.
    pub input: InputOptions,
    /// Door ids and trigger timing.
    #[schemars(skip)]
    pub doors: DoorOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ControlError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ControlError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| ControlError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Parse options from a JSON object. Missing fields use defaults.
    pub fn from_json(content: &str) -> Result<Self, ControlError> {
        let mut opts: Self = serde_json::from_str(content)
            .map_err(|e| ControlError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ControlError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ControlError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(ControlError::Io)
    }

    /// Check the depth rail ordering and the ranges the integration loop
    /// relies on.
    pub fn validate(&self) -> Result<(), ControlError> {
        let m = &self.motion;
        if !(m.min_z < m.door_threshold
            && m.door_threshold < m.door_trigger
            && m.door_trigger <= m.max_z)
        {
            return Err(ControlError::InvalidOptions(format!(
                "expected min_z < door_threshold < door_trigger <= max_z, got \
                 {} / {} / {} / {}",
                m.min_z, m.door_threshold, m.door_trigger, m.max_z
            )));
        }
        let smooth = self.camera.smooth_factor;
        if !(smooth > 0.0 && smooth <= 1.0) {
            return Err(ControlError::InvalidOptions(format!(
                "smooth_factor must be in (0, 1], got {smooth}"
            )));
        }
        let damping = self.input.inertia_damping;
        if !(damping > 0.0 && damping < 1.0) {
            return Err(ControlError::InvalidOptions(format!(
                "inertia_damping must be in (0, 1), got {damping}"
            )));
        }
        let alpha = self.input.velocity_smoothing;
        if !(0.0..1.0).contains(&alpha) {
            return Err(ControlError::InvalidOptions(format!(
                "velocity_smoothing must be in [0, 1), got {alpha}"
            )));
        }
        Ok(())
    }
}
