//! # memory-pairs
//!
//! A match-pairs (concentration) card game engine.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: A `PairsGame` owns the deck, counters, timer,
//!    pending tasks and listeners. Two sessions never interfere.
//!
//! 2. **No wall clock**: Settle delays and timer ticks are scheduled tasks
//!    on a virtual clock. The caller moves time forward with `advance`, so
//!    every rule is testable without sleeping.
//!
//! 3. **Rules stay in the core**: Adapters read snapshots and events and
//!    forward input; they never decide what a reveal does.
//!
//! ## Modules
//!
//! - `core`: Symbols, cards, decks, RNG, configuration, round state, timer,
//!   scheduling, events
//! - `engine`: The turn state machine and its snapshot view
//! - `render`: Text rendering and command parsing for terminal front-ends
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_pairs::{GameConfig, GridSize, PairsGame, Phase};
//!
//! let config = GameConfig::default().with_grid_size(GridSize::MIN).with_seed(7);
//! let mut game = PairsGame::new(config);
//!
//! // Solve the board by peeking at the deck.
//! while !game.is_won() {
//!     let first = game.selectable()[0];
//!     let second = game.deck().partner_of(first).unwrap();
//!     game.reveal(first);
//!     game.reveal(second);
//!     game.advance(Duration::from_secs(2));
//! }
//!
//! assert_eq!(game.phase(), Phase::Won);
//! assert_eq!(game.round().moves, 4);
//! ```

pub mod core;
pub mod engine;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    Card, CardFace, Deck, SymbolId, PALETTE,
    GameRng, GameConfig, GridSize, ConfigError,
    RoundState, Phase, RoundTimer, format_elapsed,
    GameEvent, ListenerId,
};

pub use crate::engine::{PairsGame, RevealOutcome, RejectReason, Snapshot, CardView};

pub use crate::render::{TextRenderer, Command, CommandError};
