use std::time::Duration;

use web_time::Instant;

/// Flags shared between independently bound input handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArbiterFlag {
    /// A horizontal touch swipe is in progress; pointer-look must stand down.
    SwipeActive,
    /// A door is opening on its own; door click handlers must stand down.
    AutoDoorOpening,
}

impl ArbiterFlag {
    const COUNT: usize = 2;

    fn index(self) -> usize {
        match self {
            Self::SwipeActive => 0,
            Self::AutoDoorOpening => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FlagSlot {
    set: bool,
    expires_at: Option<Instant>,
}

/// Explicit replacement for ambient global booleans.
///
/// A flag can be set indefinitely or with a timeout; an expired flag reads
/// as clear without anyone having to clear it. Reads and writes are
/// best-effort: timers and the frame loop may interleave them in any order.
#[derive(Debug, Clone, Default)]
pub struct InteractionArbiter {
    slots: [FlagSlot; ArbiterFlag::COUNT],
}

impl InteractionArbiter {
    /// All flags clear.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag until explicitly cleared.
    pub fn set(&mut self, flag: ArbiterFlag) {
        self.slots[flag.index()] = FlagSlot {
            set: true,
            expires_at: None,
        };
    }

    /// Set a flag that clears itself `timeout` after `now`. Setting it again
    /// pushes the expiry out.
    pub fn set_for(&mut self, flag: ArbiterFlag, now: Instant, timeout: Duration) {
        self.slots[flag.index()] = FlagSlot {
            set: true,
            expires_at: Some(now + timeout),
        };
    }

    /// Clear a flag.
    pub fn clear(&mut self, flag: ArbiterFlag) {
        self.slots[flag.index()] = FlagSlot::default();
    }

    /// Whether a flag is set and not expired at `now`.
    #[must_use]
    pub fn is_set(&self, flag: ArbiterFlag, now: Instant) -> bool {
        let slot = self.slots[flag.index()];
        slot.set && slot.expires_at.is_none_or(|at| now < at)
    }

    /// Clear every flag.
    pub fn reset(&mut self) {
        self.slots = [FlagSlot::default(); ArbiterFlag::COUNT];
    }
}
