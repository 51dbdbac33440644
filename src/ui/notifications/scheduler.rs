// SPDX-License-Identifier: MPL-2.0
//! Cancellable delayed tasks.
//!
//! The scheduler does not own a clock. Callers pass the current instant to
//! [`Scheduler::pop_due`], which keeps the notification lifecycle
//! deterministic under test and lets the UI drive it from its tick.

use std::time::{Duration, Instant};

/// Handle to a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Scheduled<T> {
    id: TaskId,
    at: Instant,
    task: T,
}

/// A set of tasks waiting for their deadline.
#[derive(Debug)]
pub struct Scheduler<T> {
    pending: Vec<Scheduled<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to become due at `at`.
    pub fn schedule(&mut self, at: Instant, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled { id, at, task });
        id
    }

    /// Schedules `task` to become due `delay` after `now`.
    ///
    /// Returns `None` without scheduling anything when the deadline is too
    /// far away to be represented; such a task would never come due.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, task: T) -> Option<TaskId> {
        now.checked_add(delay).map(|at| self.schedule(at, task))
    }

    /// Cancels a pending task.
    ///
    /// Returns `false` if the task already ran or was cancelled before.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.pending.iter().position(|s| s.id == id) {
            self.pending.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes and returns the earliest task due at `now`, with its deadline.
    ///
    /// Tasks sharing a deadline come out in the order they were scheduled.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.at <= now)
            .min_by_key(|(_, s)| (s.at, s.id.0))
            .map(|(pos, _)| pos)?;
        let scheduled = self.pending.remove(pos);
        Some((scheduled.at, scheduled.task))
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.at).min()
    }

    #[must_use]
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.iter().any(|s| s.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
