//! Scheduled tasks on a virtual clock.
//!
//! Settle delays and timer ticks are not waits. They are tasks queued for a
//! point on the scheduler's clock, and the owner decides when time passes
//! by calling [`Scheduler::advance_to`] and popping due tasks.
//!
//! ```
//! use std::time::Duration;
//! use memory_pairs::core::{Scheduler, Task};
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.schedule(Duration::from_millis(500), Task::Tick);
//! scheduler.schedule(Duration::from_millis(100), Task::DeclareWin);
//!
//! scheduler.advance_to(Duration::from_secs(1));
//! assert_eq!(scheduler.pop_due().map(|t| t.task), Some(Task::DeclareWin));
//! assert_eq!(scheduler.pop_due().map(|t| t.task), Some(Task::Tick));
//! assert!(scheduler.pop_due().is_none());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Unique identifier for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// Work the engine defers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// Add a second to the round timer and queue the next tick.
    Tick,
    /// Commit a matched pair.
    SettleMatch(usize, usize),
    /// Turn a mismatched pair back face down.
    SettleMismatch(usize, usize),
    /// Enter the won state.
    DeclareWin,
}

/// A task with its due time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    pub id: TaskId,
    pub due: Duration,
    pub task: Task,
}

/// Queue of pending tasks plus the clock they are measured against.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<ScheduledTask>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `task` to run `delay` after now. Due times saturate at
    /// `Duration::MAX`.
    pub fn schedule(&mut self, delay: Duration, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledTask {
            id,
            due: self.now.saturating_add(delay),
            task,
        });
        id
    }

    /// Drop a single task. Returns false if it already ran or never existed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Drop every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Move the clock forward. The clock never runs backwards.
    pub fn advance_to(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Remove and return the earliest task due at or before now.
    ///
    /// Ties go to the task scheduled first.
    pub fn pop_due(&mut self) -> Option<ScheduledTask> {
        self.pop_until(self.now)
    }

    /// Remove and return the earliest task due at or before `deadline`,
    /// moving the clock to that task's due time.
    ///
    /// Tasks scheduled while handling the returned task are measured from
    /// its due time, so a chain of ticks keeps its spacing across one long
    /// advance.
    pub fn pop_until(&mut self, deadline: Duration) -> Option<ScheduledTask> {
        let (slot, due) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= deadline)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(slot, t)| (slot, t.due))?;
        self.advance_to(due);
        Some(self.pending.remove(slot))
    }

    /// Time from now until the next pending task, `None` if idle.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|t| t.due.saturating_sub(self.now))
            .min()
    }

    /// Whether a task of the given kind is pending.
    #[must_use]
    pub fn has_pending(&self, matcher: impl Fn(&Task) -> bool) -> bool {
        self.pending.iter().any(|t| matcher(&t.task))
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
