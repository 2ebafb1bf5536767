//! The match-pairs turn engine.

use std::time::Duration;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::core::{
    CardFace, ConfigError, Deck, EventBus, GameConfig, GameEvent, GameRng, GridSize, ListenerId,
    Phase, RoundState, ScheduledTask, Scheduler, Task, TaskId,
};

use super::snapshot::{CardView, Snapshot};

/// Why a reveal was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The round is already won.
    RoundOver,
    /// A pair is still resolving.
    Locked,
    /// No card at that index.
    OutOfRange,
    /// The card is already face up this turn.
    AlreadyRevealed,
    /// The card belongs to a found pair.
    AlreadyMatched,
}

/// Result of a reveal request.
///
/// A rejected reveal changes nothing; the reason is informational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Refused without side effects.
    Rejected(RejectReason),
    /// First card of the turn is now face up.
    Revealed,
    /// Second card is up. The pair settles after the configured delay.
    PairPending { matched: bool },
}

impl RevealOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        !matches!(self, RevealOutcome::Rejected(_))
    }
}

/// A running match-pairs session.
///
/// Owns the deck, the round state, the scheduled tasks and the listeners.
/// Time only passes when the owner calls [`PairsGame::advance`].
///
/// ```
/// use std::time::Duration;
/// use memory_pairs::core::{Deck, GameConfig, SymbolId};
/// use memory_pairs::engine::PairsGame;
///
/// let s = SymbolId::new;
/// let deck = Deck::from_symbols(vec![s(0), s(1), s(1), s(0)]);
/// let mut game = PairsGame::with_deck(GameConfig::default(), deck);
///
/// game.reveal(0);
/// game.reveal(3);
/// game.advance(Duration::from_millis(600));
///
/// assert_eq!(game.round().matched_pairs, 1);
/// assert_eq!(game.round().moves, 1);
/// ```
#[derive(Debug)]
pub struct PairsGame {
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    round: RoundState,
    scheduler: Scheduler,
    events: EventBus,
    tick_task: Option<TaskId>,
    round_number: u32,
}

impl PairsGame {
    /// Start a session and deal the first round.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let deck = Deck::for_grid(config.grid_size, &mut rng);
        Self::start(config, rng, deck)
    }

    /// Start a session with a fixed first deal.
    ///
    /// When the deck length is a supported grid size it becomes the
    /// configured size. Later rounds are dealt from the config as usual,
    /// seeded from `config.seed` or from entropy.
    #[must_use]
    pub fn with_deck(mut config: GameConfig, deck: Deck) -> Self {
        if let Ok(grid_size) = GridSize::new(deck.len() as u32) {
            config.grid_size = grid_size;
        }
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::start(config, rng, deck)
    }

    fn start(config: GameConfig, rng: GameRng, deck: Deck) -> Self {
        let mut game = Self {
            config,
            rng,
            deck,
            round: RoundState::new(),
            scheduler: Scheduler::new(),
            events: EventBus::new(),
            tick_task: None,
            round_number: 1,
        };
        game.announce_round();
        game
    }

    // === Round lifecycle ===

    /// Deal a fresh round at the current grid size.
    ///
    /// Every pending settle, win and tick from the previous round is dropped
    /// first, so nothing scheduled earlier can touch the new cards.
    pub fn new_game(&mut self) {
        let dropped = self.scheduler.cancel_all();
        self.tick_task = None;
        self.deck = Deck::for_grid(self.config.grid_size, &mut self.rng);
        self.round = RoundState::new();
        self.round_number += 1;
        debug!("dropped {} pending task(s) from the previous round", dropped);
        self.announce_round();
    }

    /// Change the grid size and deal a fresh round.
    pub fn set_grid_size(&mut self, grid_size: GridSize) {
        self.config.grid_size = grid_size;
        self.new_game();
    }

    /// Change the grid size from a raw card count.
    ///
    /// Unsupported counts are refused and the current round continues.
    pub fn try_set_grid_size(&mut self, cards: u32) -> Result<(), ConfigError> {
        let grid_size = GridSize::new(cards)?;
        self.set_grid_size(grid_size);
        Ok(())
    }

    fn announce_round(&mut self) {
        info!(
            "round {} dealt: {} cards (seed {})",
            self.round_number,
            self.deck.len(),
            self.rng.seed()
        );
        self.events.emit(GameEvent::RoundStarted {
            grid_size: self.config.grid_size,
        });
    }

    // === Turn engine ===

    /// Turn a card face up.
    ///
    /// Refused without side effects while locked, after the win, for an
    /// out-of-range index, or for a card already face up.
    pub fn reveal(&mut self, index: usize) -> RevealOutcome {
        if let Err(reason) = self.check_reveal(index) {
            trace!("reveal {} rejected: {:?}", index, reason);
            return RevealOutcome::Rejected(reason);
        }

        if self.round.timer.start() {
            self.schedule_tick();
        }

        self.deck.set_face(index, CardFace::Revealed);
        self.round.revealed.push(index);
        self.events.emit(GameEvent::CardRevealed { index });

        let (first, second) = match self.round.revealed.as_slice() {
            &[first, second] => (first, second),
            _ => return RevealOutcome::Revealed,
        };

        self.round.locked = true;
        self.round.moves += 1;
        self.events.emit(GameEvent::MoveCounted {
            moves: self.round.moves,
        });

        let matched = match (self.deck.card(first), self.deck.card(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };
        if matched {
            self.scheduler
                .schedule(self.config.match_delay(), Task::SettleMatch(first, second));
        } else {
            self.scheduler
                .schedule(self.config.mismatch_delay(), Task::SettleMismatch(first, second));
        }
        debug!(
            "move {}: cards {} and {} {}",
            self.round.moves,
            first,
            second,
            if matched { "match" } else { "differ" }
        );

        RevealOutcome::PairPending { matched }
    }

    fn check_reveal(&self, index: usize) -> Result<(), RejectReason> {
        if self.round.won {
            return Err(RejectReason::RoundOver);
        }
        if self.round.locked {
            return Err(RejectReason::Locked);
        }
        let card = self.deck.card(index).ok_or(RejectReason::OutOfRange)?;
        match card.face {
            CardFace::Hidden => Ok(()),
            CardFace::Revealed => Err(RejectReason::AlreadyRevealed),
            CardFace::Matched => Err(RejectReason::AlreadyMatched),
        }
    }

    /// Indices a reveal would currently accept.
    #[must_use]
    pub fn selectable(&self) -> Vec<usize> {
        (0..self.deck.len())
            .filter(|&i| self.check_reveal(i).is_ok())
            .collect()
    }

    // === Time ===

    /// Let `elapsed` pass, running every task that falls due, in order.
    ///
    /// `advance(Duration::ZERO)` runs tasks due right now, which is how a
    /// zero-delay config settles a pair. The clock saturates at
    /// `Duration::MAX`.
    pub fn advance(&mut self, elapsed: Duration) {
        let deadline = self.scheduler.now().saturating_add(elapsed);
        while let Some(scheduled) = self.scheduler.pop_until(deadline) {
            self.run(scheduled);
        }
        self.scheduler.advance_to(deadline);
    }

    /// Time until the next scheduled task, `None` if nothing is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Virtual time since the session started.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    fn schedule_tick(&mut self) {
        let id = self.scheduler.schedule(self.config.tick_interval(), Task::Tick);
        self.tick_task = Some(id);
    }

    fn run(&mut self, scheduled: ScheduledTask) {
        trace!("running {} at {:?}: {:?}", scheduled.id, scheduled.due, scheduled.task);
        match scheduled.task {
            Task::Tick => self.on_tick(),
            Task::SettleMatch(first, second) => self.settle_match(first, second),
            Task::SettleMismatch(first, second) => self.settle_mismatch(first, second),
            Task::DeclareWin => self.declare_win(),
        }
    }

    fn on_tick(&mut self) {
        self.tick_task = None;
        if let Some(seconds) = self.round.timer.tick() {
            self.events.emit(GameEvent::TimerTicked { seconds });
            self.schedule_tick();
        }
    }

    fn settle_match(&mut self, first: usize, second: usize) {
        self.deck.set_face(first, CardFace::Matched);
        self.deck.set_face(second, CardFace::Matched);
        self.round.matched_pairs += 1;
        self.round.revealed.clear();
        self.round.locked = false;
        self.events.emit(GameEvent::PairMatched { first, second });

        if self.round.matched_pairs as usize == self.deck.pair_count() {
            debug!("all {} pairs found", self.round.matched_pairs);
            self.scheduler.schedule(self.config.win_delay(), Task::DeclareWin);
        }
    }

    fn settle_mismatch(&mut self, first: usize, second: usize) {
        self.deck.set_face(first, CardFace::Hidden);
        self.deck.set_face(second, CardFace::Hidden);
        self.round.revealed.clear();
        self.round.locked = false;
        self.events.emit(GameEvent::PairHidden { first, second });
    }

    fn declare_win(&mut self) {
        self.round.won = true;
        self.round.timer.freeze();
        if let Some(id) = self.tick_task.take() {
            self.scheduler.cancel(id);
        }
        info!(
            "round {} won in {} moves, {}",
            self.round_number,
            self.round.moves,
            self.round.timer.display()
        );
        self.events.emit(GameEvent::Won {
            moves: self.round.moves,
            seconds: self.round.elapsed_seconds(),
        });
    }

    // === Subscriptions ===

    /// Call `listener` for every event from now on.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        self.events.subscribe(listener)
    }

    /// Stop calling a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Keep or stop keeping events for `drain_events`. Polling is on by
    /// default; listener-only adapters can turn it off.
    pub fn set_polling(&mut self, polling: bool) {
        self.events.set_polling(polling);
    }

    /// Take the events queued since the last drain, up to `QUEUE_LIMIT`
    /// of the most recent.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.round.won
    }

    /// Pairs in the current deal.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.deck.pair_count()
    }

    /// Rounds dealt this session, starting at 1.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Seed of the deck RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Owned copy of everything an adapter draws.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            round_number: self.round_number,
            grid_size: self.deck.len(),
            pair_count: self.deck.pair_count(),
            phase: self.round.phase(),
            moves: self.round.moves,
            matched_pairs: self.round.matched_pairs,
            elapsed_seconds: self.round.elapsed_seconds(),
            elapsed_display: self.round.timer.display(),
            cards: self.deck.cards().iter().map(CardView::from).collect(),
        }
    }
}
