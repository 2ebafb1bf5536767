//! Game configuration types.
//!
//! Adapters configure the engine by providing:
//! - `GridSize`: How many cards are dealt (always a supported even size)
//! - `GameConfig`: Grid size, settle delays, tick interval and seed
//!
//! Invalid values are rejected up front so deck construction never sees them.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::symbol::PALETTE_SIZE;

/// Errors raised while validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported grid size {0} (supported: {:?})", GridSize::SUPPORTED)]
    UnsupportedGridSize(u32),
    #[error("pair count {0} is outside 1..={}", PALETTE_SIZE)]
    InvalidPairCount(usize),
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Number of cards on the board.
///
/// Only values in [`GridSize::SUPPORTED`] can be constructed: each is even,
/// at least 8, and at most twice the palette size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GridSize(u32);

impl GridSize {
    /// Grid sizes a player can choose from.
    pub const SUPPORTED: [u32; 7] = [8, 10, 12, 16, 20, 24, 30];

    /// The smallest board.
    pub const MIN: GridSize = GridSize(8);

    /// Validate a requested grid size.
    pub fn new(cards: u32) -> Result<Self, ConfigError> {
        if Self::SUPPORTED.contains(&cards) {
            Ok(Self(cards))
        } else {
            Err(ConfigError::UnsupportedGridSize(cards))
        }
    }

    /// Nearest supported size. Ties resolve to the smaller board.
    #[must_use]
    pub fn clamped(cards: u32) -> Self {
        let mut best = Self::SUPPORTED[0];
        for &size in &Self::SUPPORTED {
            if size.abs_diff(cards) < best.abs_diff(cards) {
                best = size;
            }
        }
        Self(best)
    }

    /// Number of cards.
    #[must_use]
    pub const fn cards(self) -> u32 {
        self.0
    }

    /// Number of pairs (`cards / 2`).
    #[must_use]
    pub const fn pair_count(self) -> usize {
        (self.0 / 2) as usize
    }

    /// All supported sizes, smallest first.
    pub fn all() -> impl Iterator<Item = GridSize> {
        Self::SUPPORTED.into_iter().map(GridSize)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(16)
    }
}

impl TryFrom<u32> for GridSize {
    type Error = ConfigError;

    fn try_from(cards: u32) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl From<GridSize> for u32 {
    fn from(size: GridSize) -> u32 {
        size.0
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} cards", self.0)
    }
}

/// Complete game configuration.
///
/// Delays are pacing for the player, not something the rules depend on;
/// all of them may be zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt per round.
    pub grid_size: GridSize,

    /// Pause before a matched pair is committed (default 600 ms).
    pub match_delay_ms: u64,

    /// Pause before a mismatched pair flips back (default 1000 ms).
    pub mismatch_delay_ms: u64,

    /// Pause between the final match and the win (default 500 ms).
    pub win_delay_ms: u64,

    /// Timer tick interval (default 1000 ms).
    pub tick_ms: u64,

    /// Deck seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            match_delay_ms: 600,
            mismatch_delay_ms: 1000,
            win_delay_ms: 500,
            tick_ms: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the grid size.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: GridSize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set a fixed deck seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set all three settle delays.
    #[must_use]
    pub fn with_delays(mut self, match_ms: u64, mismatch_ms: u64, win_ms: u64) -> Self {
        self.match_delay_ms = match_ms;
        self.mismatch_delay_ms = mismatch_ms;
        self.win_delay_ms = win_ms;
        self
    }

    /// Resolve pairs and wins without any pause.
    #[must_use]
    pub fn instant(self) -> Self {
        self.with_delays(0, 0, 0)
    }

    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    pub fn win_delay(&self) -> Duration {
        Duration::from_millis(self.win_delay_ms)
    }

    /// Tick interval. A zero setting is raised to 1 ms so the timer cannot
    /// spin inside a single advance.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}
