//! Control suspension and cross-handler interaction flags.
//!
//! [`SuspensionManager`] owns the `Active → Suspended → Restoring → Active`
//! cycle and the single saved camera snapshot. [`InteractionArbiter`] holds
//! the typed flags input handlers consult so two handlers never interpret
//! the same physical input.

/// Typed interaction flags with timeout-based clearing.
pub mod arbiter;
/// Suspend/restore state machine and the saved camera snapshot.
pub mod suspension;

pub use arbiter::{ArbiterFlag, InteractionArbiter};
pub use suspension::{
    ControlState, RestoreOutcome, RestoreStep, SavedCameraSnapshot,
    SuspensionManager,
};
