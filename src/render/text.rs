//! Plain-text rendering of a snapshot.

use crate::core::{CardFace, Phase};
use crate::engine::{CardView, Snapshot};

/// Columns used to lay out a board of `cards` cards.
///
/// ```
/// use memory_pairs::render::grid_columns;
///
/// assert_eq!(grid_columns(8), 4);
/// assert_eq!(grid_columns(30), 6);
/// ```
#[must_use]
pub fn grid_columns(cards: usize) -> usize {
    match cards {
        0..=8 => 4,
        10 => 5,
        12 | 16 => 4,
        20 => 5,
        24 | 30 => 6,
        n => (n as f64).sqrt().ceil() as usize,
    }
}

/// Renders boards, HUD lines and the victory summary as text.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    /// Width of one cell, in terminal columns.
    pub cell_width: usize,
    /// Print 1-based card numbers under face-down cards.
    pub show_numbers: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            cell_width: 6,
            show_numbers: true,
        }
    }
}

impl TextRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for one cell.
    #[must_use]
    pub fn cell(&self, card: &CardView) -> String {
        let glyph = card.symbol.map_or("?", |s| s.glyph());
        match card.face {
            CardFace::Hidden if self.show_numbers => format!("{}", card.position + 1),
            CardFace::Hidden => "?".to_string(),
            CardFace::Revealed => glyph.to_string(),
            CardFace::Matched => format!("[{glyph}]"),
        }
    }

    /// The board, one line per row.
    #[must_use]
    pub fn board(&self, snapshot: &Snapshot) -> String {
        let columns = grid_columns(snapshot.cards.len()).max(1);
        snapshot
            .cards
            .chunks(columns)
            .map(|row| {
                row.iter()
                    .map(|card| format!("{:^width$}", self.cell(card), width = self.cell_width))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Moves and elapsed time.
    #[must_use]
    pub fn hud(&self, snapshot: &Snapshot) -> String {
        format!(
            "Moves: {}   Time: {}   Pairs: {}/{}",
            snapshot.moves, snapshot.elapsed_display, snapshot.matched_pairs, snapshot.pair_count
        )
    }

    /// End-of-round summary. `None` unless the round is won.
    #[must_use]
    pub fn victory(&self, snapshot: &Snapshot) -> Option<String> {
        let (moves, time) = snapshot.summary()?;
        Some(format!(
            "You found all {} pairs!\nMoves: {}\nTime: {}",
            snapshot.pair_count, moves, time
        ))
    }

    /// Board, HUD and (when won) the summary.
    #[must_use]
    pub fn frame(&self, snapshot: &Snapshot) -> String {
        let mut out = format!("{}\n\n{}", self.board(snapshot), self.hud(snapshot));
        match snapshot.phase {
            Phase::Won => {
                if let Some(victory) = self.victory(snapshot) {
                    out.push_str("\n\n");
                    out.push_str(&victory);
                }
            }
            Phase::Resolving => out.push_str("\n(resolving...)"),
            Phase::Idle | Phase::OneRevealed => {}
        }
        out
    }
}
