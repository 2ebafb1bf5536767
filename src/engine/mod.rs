//! The match-pairs engine.
//!
//! `PairsGame` owns one session: the deck, the round state, scheduled
//! settle/tick tasks and event listeners. Adapters call [`PairsGame::reveal`]
//! for input, [`PairsGame::advance`] as time passes, and read state through
//! [`PairsGame::snapshot`] or the event stream.
//!
//! ## Turn sequence
//!
//! ```text
//! Idle --reveal--> OneRevealed --reveal--> Resolving --settle--> Idle
//!                                                       \--last pair--> Won
//! ```

mod game;
mod snapshot;

pub use game::{PairsGame, RejectReason, RevealOutcome};
pub use snapshot::{CardView, Snapshot};
