//! Round state.
//!
//! ## RoundState
//!
//! Everything that changes during a round apart from the cards themselves:
//! - Pending reveals (at most two)
//! - Move and matched-pair counters
//! - Round timer
//! - Lock flag, set while a pair is resolving
//!
//! ## Phase
//!
//! A derived view of where the turn state machine stands.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::timer::RoundTimer;

/// Where the turn state machine stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No card pending.
    Idle,
    /// One card face up, waiting for the second.
    OneRevealed,
    /// Two cards face up and locked until they settle.
    Resolving,
    /// All pairs found. Terminal.
    Won,
}

/// Mutable per-round counters and flags.
///
/// Replaced wholesale on every new round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Indices revealed this turn, in reveal order.
    pub revealed: SmallVec<[usize; 2]>,

    /// Completed turns (pairs of reveals), matched or not.
    pub moves: u32,

    /// Pairs committed as matched.
    pub matched_pairs: u32,

    /// Elapsed-time counter.
    pub timer: RoundTimer,

    /// True while a pair is resolving. All reveals are refused.
    pub locked: bool,

    /// True once the round has been won.
    pub won: bool,
}

impl RoundState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds on the round timer.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.timer.seconds()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else if self.locked {
            Phase::Resolving
        } else if self.revealed.len() == 1 {
            Phase::OneRevealed
        } else {
            Phase::Idle
        }
    }

    /// Whether the round has seen no accepted reveal yet.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.moves == 0 && self.revealed.is_empty() && self.matched_pairs == 0
    }
}
