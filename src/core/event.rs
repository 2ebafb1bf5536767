//! Game events.
//!
//! Every state change the engine makes is announced as a `GameEvent`, so an
//! adapter can redraw without knowing the rules. Events are delivered to
//! subscribed listeners as they happen and also queued for polling. The queue
//! holds at most `QUEUE_LIMIT` events; the oldest are dropped first.

use std::collections::VecDeque;

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::GridSize;

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh round was dealt.
    RoundStarted { grid_size: GridSize },
    /// A card was turned face up.
    CardRevealed { index: usize },
    /// A second card was revealed and the move counter advanced.
    MoveCounted { moves: u32 },
    /// A pair was committed as matched.
    PairMatched { first: usize, second: usize },
    /// A mismatched pair was turned back face down.
    PairHidden { first: usize, second: usize },
    /// The round timer advanced.
    TimerTicked { seconds: u64 },
    /// Every pair has been found.
    Won { moves: u32, seconds: u64 },
}

/// Identifier returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

/// Most events the poll queue keeps between drains.
pub const QUEUE_LIMIT: usize = 1024;

/// A subscriber callback.
pub type Listener = Box<dyn FnMut(&GameEvent)>;

/// Fan-out of events to listeners, plus a queue for polling adapters.
pub struct EventBus {
    listeners: FxHashMap<ListenerId, Listener>,
    order: Vec<ListenerId>,
    next_id: u32,
    queue: VecDeque<GameEvent>,
    polling: bool,
    dropped: usize,
}

impl Default for EventBus {
    fn default() -> Self {
        Self {
            listeners: FxHashMap::default(),
            order: Vec::new(),
            next_id: 0,
            queue: VecDeque::new(),
            polling: true,
            dropped: 0,
        }
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the poll queue on or off. Turning it off clears it.
    pub fn set_polling(&mut self, polling: bool) {
        self.polling = polling;
        if !polling {
            self.queue.clear();
        }
    }

    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.polling
    }

    /// Events dropped from the full queue since the last drain.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Register a listener. Listeners run in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, Box::new(listener));
        self.order.push(id);
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.order.retain(|&l| l != id);
        self.listeners.remove(&id).is_some()
    }

    /// Deliver an event to every listener and queue it.
    pub fn emit(&mut self, event: GameEvent) {
        for id in &self.order {
            if let Some(listener) = self.listeners.get_mut(id) {
                listener(&event);
            }
        }
        if !self.polling {
            return;
        }
        if self.queue.len() == QUEUE_LIMIT {
            self.queue.pop_front();
            if self.dropped == 0 {
                debug!("event queue full, dropping oldest events until drained");
            }
            self.dropped += 1;
        }
        self.queue.push_back(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.dropped = 0;
        self.queue.drain(..).collect()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.order)
            .field("queued", &self.queue.len())
            .field("polling", &self.polling)
            .finish()
    }
}
