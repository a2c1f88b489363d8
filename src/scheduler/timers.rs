use std::time::Duration;

use rustc_hash::FxHashMap;
use web_time::Instant;

/// Identifier of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    due: Instant,
    task: T,
}

/// Fire-once timers carrying a typed task.
///
/// Nothing fires on its own: [`drain_due`](Self::drain_due) hands back every
/// task whose deadline has passed, in deadline order (ties in scheduling
/// order), and forgets them.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    next_id: u64,
    pending: FxHashMap<TimerId, Pending<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: FxHashMap::default(),
        }
    }
}

impl<T> TimerQueue<T> {
    /// Empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `task` once `delay` has passed since `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let _ = self.pending.insert(
            id,
            Pending {
                due: now + delay,
                task,
            },
        );
        id
    }

    /// Cancel a timer, returning its task if it had not fired.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.pending.remove(&id).map(|p| p.task)
    }

    /// Remove and return every task due at `now`.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let mut due: Vec<(Instant, TimerId)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.due <= now)
            .map(|(id, p)| (p.due, *id))
            .collect();
        due.sort_unstable();
        due.into_iter()
            .filter_map(|(_, id)| self.pending.remove(&id).map(|p| p.task))
            .collect()
    }

    /// Cancel every timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Whether no timers are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_order_once() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        let _ = q.schedule(t0, Duration::from_millis(50), "late");
        let _ = q.schedule(t0, Duration::from_millis(10), "early");
        let _ = q.schedule(t0, Duration::from_millis(10), "early-second");

        assert!(q.drain_due(t0 + Duration::from_millis(5)).is_empty());
        assert_eq!(
            q.drain_due(t0 + Duration::from_millis(60)),
            vec!["early", "early-second", "late"]
        );
        assert!(q.is_empty());
        assert!(q.drain_due(t0 + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        let id = q.schedule(t0, Duration::from_millis(10), 1_u8);
        let keep = q.schedule(t0, Duration::from_millis(20), 2_u8);
        assert_eq!(q.cancel(id), Some(1));
        assert_eq!(q.cancel(id), None);
        assert_eq!(q.cancel(keep), Some(2));
        assert!(q.is_empty());
        let _ = q.schedule(t0, Duration::from_millis(20), 3_u8);
        assert_eq!(q.drain_due(t0 + Duration::from_millis(30)), vec![3]);
    }

    #[test]
    fn clear_drops_everything() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        let _ = q.schedule(t0, Duration::ZERO, ());
        let _ = q.schedule(t0, Duration::ZERO, ());
        assert!(!q.is_empty());
        q.clear();
        assert!(q.drain_due(t0).is_empty());
    }
}
