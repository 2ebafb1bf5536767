//! Round timer.
//!
//! Counts whole seconds. The engine drives it: `start` on the first accepted
//! reveal, `tick` once per scheduled tick, `freeze` on a win. A frozen timer
//! never moves again; a new round gets a new timer.

use serde::{Deserialize, Serialize};

/// Lifecycle of a round timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerStatus {
    /// Not started yet.
    #[default]
    Idle,
    /// Counting.
    Running,
    /// Stopped for good.
    Frozen,
}

/// Elapsed-seconds counter for one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTimer {
    seconds: u64,
    status: TimerStatus,
}

impl RoundTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting. Returns true only on the transition out of `Idle`.
    pub fn start(&mut self) -> bool {
        if self.status == TimerStatus::Idle {
            self.status = TimerStatus::Running;
            true
        } else {
            false
        }
    }

    /// Add one second if running. Returns the new total, or `None` if the
    /// timer is not running.
    pub fn tick(&mut self) -> Option<u64> {
        if self.status == TimerStatus::Running {
            self.seconds += 1;
            Some(self.seconds)
        } else {
            None
        }
    }

    /// Stop permanently.
    pub fn freeze(&mut self) {
        self.status = TimerStatus::Frozen;
    }

    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    #[must_use]
    pub fn status(&self) -> TimerStatus {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Elapsed time as `m:ss`.
    #[must_use]
    pub fn display(&self) -> String {
        format_elapsed(self.seconds)
    }
}

/// Format seconds as `m:ss`: minutes unpadded and unbounded, seconds padded
/// to two digits.
///
/// ```
/// use memory_pairs::core::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "0:00");
/// assert_eq!(format_elapsed(65), "1:05");
/// assert_eq!(format_elapsed(3600), "60:00");
/// ```
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
