// Copyright 2026 the Porchlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-once timers for delayed closes.
//!
//! The controller never waits. It asks a [`Scheduler`] for a timer and is
//! called back through [`NavController::on_timer`](crate::controller::NavController::on_timer)
//! with the same [`TimerId`] once the delay elapses.
//!
//! [`TimerQueue`] is a deterministic virtual-time scheduler for tests, demos, and
//! hosts that already own a frame clock:
//!
//! ```
//! use core::time::Duration;
//! use porchlight_nav::timer::{Scheduler, TimerQueue};
//!
//! let mut q = TimerQueue::new();
//! let a = q.schedule(Duration::from_millis(150));
//! let b = q.schedule(Duration::from_millis(50));
//! assert!(q.advance(Duration::from_millis(49)).is_empty());
//! assert_eq!(q.advance(Duration::from_millis(1)), vec![b]);
//! q.cancel(a);
//! assert!(q.advance(Duration::from_secs(1)).is_empty());
//! ```

use alloc::vec::Vec;
use core::time::Duration;

/// Handle to a scheduled callback.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Source of fire-once timers.
///
/// Implementations deliver each scheduled id back to the owner at most once,
/// and never after [`Scheduler::cancel`] for that id.
pub trait Scheduler {
    /// Schedule a callback `delay` from now.
    fn schedule(&mut self, delay: Duration) -> TimerId;
    /// Cancel a scheduled callback. Unknown or fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Virtual-time timer queue.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    // (deadline, id); ids grow monotonically so they also encode schedule order.
    pending: Vec<(Duration, TimerId)>,
}

impl TimerQueue {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of outstanding timers.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if `id` is still outstanding.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|&(_, p)| p == id)
    }

    /// Move time forward and return timers that became due, earliest first.
    ///
    /// A timer is due once `deadline <= now`. Equal deadlines fire in schedule order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now = self.now.saturating_add(by);
        let now = self.now;
        let mut due: Vec<(Duration, TimerId)> = Vec::new();
        self.pending.retain(|&entry| {
            if entry.0 <= now {
                due.push(entry);
                false
            } else {
                true
            }
        });
        due.sort_unstable();
        due.into_iter().map(|(_, id)| id).collect()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push((self.now.saturating_add(delay), id));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|&(_, p)| p != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_exactly_at_deadline() {
        let mut q = TimerQueue::new();
        let id = q.schedule(150 * MS);
        assert!(q.advance(149 * MS).is_empty());
        assert!(q.is_pending(id));
        assert_eq!(q.advance(MS), vec![id]);
        assert!(!q.is_pending(id));
        assert_eq!(q.now(), 150 * MS);
    }

    #[test]
    fn fires_once() {
        let mut q = TimerQueue::new();
        let id = q.schedule(10 * MS);
        assert_eq!(q.advance(20 * MS), vec![id]);
        assert!(q.advance(20 * MS).is_empty());
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let mut q = TimerQueue::new();
        let a = q.schedule(10 * MS);
        let b = q.schedule(10 * MS);
        let c = q.schedule(5 * MS);
        assert_eq!(q.advance(10 * MS), vec![c, a, b]);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut q = TimerQueue::new();
        let a = q.schedule(10 * MS);
        q.cancel(a);
        q.cancel(a);
        q.cancel(TimerId(999));
        assert_eq!(q.pending(), 0);
        assert!(q.advance(20 * MS).is_empty());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut q = TimerQueue::new();
        let a = q.schedule(MS);
        q.cancel(a);
        let b = q.schedule(MS);
        assert_ne!(a, b);
    }
}
