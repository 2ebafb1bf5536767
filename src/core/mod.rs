//! Core types: symbols, cards, decks, RNG, configuration, round state,
//! timer, scheduling and events.
//!
//! Nothing here knows the turn rules. The engine composes these pieces.

pub mod symbol;
pub mod card;
pub mod deck;
pub mod rng;
pub mod config;
pub mod state;
pub mod timer;
pub mod schedule;
pub mod event;

pub use symbol::{Symbol, SymbolId, PALETTE, PALETTE_SIZE};
pub use card::{label_for, Card, CardFace};
pub use deck::Deck;
pub use rng::GameRng;
pub use config::{ConfigError, GameConfig, GridSize};
pub use state::{Phase, RoundState};
pub use timer::{format_elapsed, RoundTimer, TimerStatus};
pub use schedule::{ScheduledTask, Scheduler, Task, TaskId};
pub use event::{EventBus, GameEvent, Listener, ListenerId, QUEUE_LIMIT};
