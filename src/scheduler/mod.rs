//! Display-refresh scheduling and fire-once timers.
//!
//! The controller never owns a thread or a clock. The host injects a
//! [`FrameScheduler`] that delivers one callback per display refresh, and
//! polls the [`TimerQueue`] with the current time. [`ManualScheduler`] is a
//! scheduler with no platform behind it, for headless hosts and tests.

/// Fire-once timers keyed by [`TimerId`].
pub mod timers;

pub use timers::{TimerId, TimerQueue};

/// Opaque token for one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Wrap a raw host-side request id.
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw host-side request id.
    #[must_use]
    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// Requests and cancels display-refresh callbacks.
///
/// The host calls [`WalkController::on_frame`](crate::WalkController::on_frame)
/// with the handle it returned once the callback fires. At most one request
/// is outstanding per controller.
pub trait FrameScheduler {
    /// Request one callback for the next display refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel an outstanding request. Cancelling a handle that already fired
    /// is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler that only counts requests; the host drives frames by hand.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    next_id: u64,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    /// Fresh scheduler with no requests.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total frames requested so far.
    #[must_use]
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total requests cancelled so far.
    #[must_use]
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested += 1;
        FrameHandle(self.next_id)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        log::trace!("frame {} cancelled", handle.0);
        self.cancelled += 1;
    }
}
