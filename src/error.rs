//! Crate-level error types.
//!
//! Nothing in the per-frame path panics: every failure is reported as a
//! [`ControlError`] and the caller decides whether it matters. Most callers
//! ignore input-path errors, since a discarded event is the intended outcome.

use std::fmt;

/// Failure reported by the host scene when emitting an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// The target object id does not exist in the scene.
    UnknownObject(String),
    /// The runtime rejected or failed to deliver the event.
    Rejected(String),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownObject(id) => write!(f, "no scene object `{id}`"),
            Self::Rejected(msg) => write!(f, "runtime rejected event: {msg}"),
        }
    }
}

impl std::error::Error for EmitError {}

/// Errors produced by the vestibule crate.
#[derive(Debug)]
pub enum ControlError {
    /// The camera handle is not available (not yet initialized, lost, or
    /// the controller was torn down).
    MissingHandle,
    /// Malformed or multi-contact input that was discarded.
    InvalidGesture,
    /// Input arrived while controls are suspended or restoring.
    Inactive,
    /// The door is locked by a pending cooldown.
    DoorCoolingDown(String),
    /// The door id is not configured.
    UnknownDoor(String),
    /// Event emission to the host scene failed.
    Emit(EmitError),
    /// Options failed validation.
    InvalidOptions(String),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHandle => write!(f, "camera handle unavailable"),
            Self::InvalidGesture => write!(f, "invalid gesture discarded"),
            Self::Inactive => write!(f, "controls are not active"),
            Self::DoorCoolingDown(id) => {
                write!(f, "door `{id}` is cooling down")
            }
            Self::UnknownDoor(id) => write!(f, "unknown door `{id}`"),
            Self::Emit(e) => write!(f, "emit failed: {e}"),
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ControlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Emit(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EmitError> for ControlError {
    fn from(e: EmitError) -> Self {
        Self::Emit(e)
    }
}

impl From<std::io::Error> for ControlError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
