//! Owned, serializable views of a game for adapters.

use serde::{Deserialize, Serialize};

use crate::core::{label_for, Card, CardFace, Phase, SymbolId};

/// One card as a player may see it.
///
/// `symbol` is `None` while the card is face down.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub position: usize,
    pub face: CardFace,
    pub symbol: Option<SymbolId>,
}

impl CardView {
    /// Accessible label, e.g. `Card 3, showing apple`.
    #[must_use]
    pub fn label(&self) -> String {
        label_for(self.position, self.face, self.symbol.map_or("icon", SymbolId::name))
    }
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            position: card.position,
            face: card.face,
            symbol: card.face.is_face_up().then_some(card.symbol),
        }
    }
}

/// Everything needed to draw the board and HUD.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub round_number: u32,
    pub grid_size: usize,
    pub pair_count: usize,
    pub phase: Phase,
    pub moves: u32,
    pub matched_pairs: u32,
    pub elapsed_seconds: u64,
    /// `m:ss`
    pub elapsed_display: String,
    pub cards: Vec<CardView>,
}

impl Snapshot {
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// Final moves and time, present only once the round is won.
    #[must_use]
    pub fn summary(&self) -> Option<(u32, &str)> {
        self.is_won()
            .then_some((self.moves, self.elapsed_display.as_str()))
    }
}
