// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![warn(unused_results)]
#![warn(unused_qualifications)]
// Cast hygiene
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]

//! First-person walkthrough camera controller.
//!
//! Vestibule drives a camera along a single depth rail between two zones (an
//! outer terrace and an interior) separated by a door. Pointer, touch, wheel
//! and discrete-button input are normalized into one motion model, eased
//! toward by a per-frame integration loop, and gated by zone.
//!
//! # Key entry points
//!
//! - [`engine::WalkController`] - the controller and its public API
//! - [`options::Options`] - tunables, loadable from TOML presets
//! - [`runtime::SceneRuntime`] - the seam to the host scene (camera handle,
//!   object lookup, event emission)
//! - [`scheduler::FrameScheduler`] - the injected display-refresh scheduler
//!
//! # Architecture
//!
//! Everything runs on one thread. The host forwards raw input events as they
//! arrive and calls [`engine::WalkController::on_frame`] from its display
//! refresh callback. Within a frame the order is fixed: timers, explicit
//! transitions, inertia, zone edge handling, integration, facing objects,
//! door proximity. Fire-once door timers live in a [`scheduler::TimerQueue`]
//! and arbiter flags carry their own expiry. Both are read against an
//! explicit `now`, so tests step time and frames by hand.

pub mod animation;
pub mod camera;
pub mod control;
pub mod door;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod runtime;
pub mod scheduler;

pub use engine::WalkController;
pub use error::ControlError;
pub use options::Options;
