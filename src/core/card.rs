//! Cards on the board.
//!
//! A `Card` is one slot in the deck. Its symbol and position never change
//! during a round; only its `face` moves between states, and only through
//! the engine's transitions.

use serde::{Deserialize, Serialize};

use super::symbol::SymbolId;

/// Visible state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, waiting for its pair to resolve.
    Revealed,
    /// Permanently face up.
    Matched,
}

impl CardFace {
    /// Whether the symbol is showing.
    #[must_use]
    pub fn is_face_up(self) -> bool {
        !matches!(self, CardFace::Hidden)
    }
}

/// A single card in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Which symbol this card shows. Exactly one other card shares it.
    pub symbol: SymbolId,

    /// Index of this card in its deck.
    pub position: usize,

    /// Current face.
    pub face: CardFace,
}

impl Card {
    /// Create a hidden card.
    #[must_use]
    pub fn new(symbol: SymbolId, position: usize) -> Self {
        Self {
            symbol,
            position,
            face: CardFace::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.face == CardFace::Hidden
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.face == CardFace::Revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == CardFace::Matched
    }

    /// Whether this card and `other` form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.position != other.position && self.symbol == other.symbol
    }

    /// Label for assistive technology, numbered from 1.
    ///
    /// ```
    /// use memory_pairs::core::{Card, CardFace, SymbolId};
    ///
    /// let mut card = Card::new(SymbolId::new(0), 2);
    /// assert_eq!(card.label(), "Card 3, hidden");
    /// card.face = CardFace::Revealed;
    /// assert_eq!(card.label(), "Card 3, showing apple");
    /// card.face = CardFace::Matched;
    /// assert_eq!(card.label(), "Card 3, matched apple");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        label_for(self.position, self.face, self.symbol.name())
    }
}

/// Accessible label for a card at `position` showing `name` when face up.
#[must_use]
pub fn label_for(position: usize, face: CardFace, name: &str) -> String {
    let number = position + 1;
    match face {
        CardFace::Hidden => format!("Card {number}, hidden"),
        CardFace::Revealed => format!("Card {number}, showing {name}"),
        CardFace::Matched => format!("Card {number}, matched {name}"),
    }
}
