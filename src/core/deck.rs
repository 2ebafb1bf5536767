//! Deck construction.
//!
//! A deck for `P` pairs takes the first `P` palette symbols, lays each down
//! twice, shuffles the lot and numbers the cards by their final position.
//!
//! ```
//! use memory_pairs::core::{Deck, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let deck = Deck::build(4, &mut rng).unwrap();
//!
//! assert_eq!(deck.len(), 8);
//! assert!(deck.symbol_counts().values().all(|&n| n == 2));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardFace};
use super::config::{ConfigError, GridSize};
use super::rng::GameRng;
use super::symbol::{SymbolId, PALETTE_SIZE};

/// An ordered, shuffled set of paired cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build and shuffle a deck of `pair_count` pairs.
    ///
    /// Fails if `pair_count` is zero or larger than the palette.
    pub fn build(pair_count: usize, rng: &mut GameRng) -> Result<Self, ConfigError> {
        if pair_count == 0 || pair_count > PALETTE_SIZE {
            return Err(ConfigError::InvalidPairCount(pair_count));
        }
        Ok(Self::shuffled(pair_count, rng))
    }

    /// Build and shuffle a deck sized for `grid`.
    ///
    /// Every `GridSize` fits the palette, so this cannot fail.
    #[must_use]
    pub fn for_grid(grid: GridSize, rng: &mut GameRng) -> Self {
        Self::shuffled(grid.pair_count(), rng)
    }

    fn shuffled(pair_count: usize, rng: &mut GameRng) -> Self {
        let mut symbols = Self::paired_symbols(pair_count.min(PALETTE_SIZE));
        rng.shuffle(&mut symbols);
        Self::from_symbols(symbols)
    }

    /// Build a deck in a fixed order, for tests and replays.
    ///
    /// The caller is responsible for supplying each symbol exactly twice.
    #[must_use]
    pub fn from_symbols(symbols: Vec<SymbolId>) -> Self {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| Card::new(symbol, position))
            .collect();
        Self { cards }
    }

    /// The first `pair_count` palette symbols, each listed twice, unshuffled.
    fn paired_symbols(pair_count: usize) -> Vec<SymbolId> {
        let chosen = (0..pair_count as u8).map(SymbolId::new);
        chosen.clone().chain(chosen).collect()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get a card by position.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Set a card's face. Returns false for an out-of-range index.
    pub(crate) fn set_face(&mut self, index: usize, face: CardFace) -> bool {
        match self.card_mut(index) {
            Some(card) => {
                card.face = face;
                true
            }
            None => false,
        }
    }

    /// All cards in position order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// How many times each symbol appears.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<SymbolId, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        counts
    }

    /// Number of cards in the given face state.
    #[must_use]
    pub fn count_face(&self, face: CardFace) -> usize {
        self.cards.iter().filter(|c| c.face == face).count()
    }

    /// Whether every card has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(Card::is_matched)
    }

    /// Position of the other card carrying `index`'s symbol.
    #[must_use]
    pub fn partner_of(&self, index: usize) -> Option<usize> {
        let symbol = self.card(index)?.symbol;
        self.cards
            .iter()
            .position(|c| c.symbol == symbol && c.position != index)
    }
}
