//! The symbol palette cards are drawn from.
//!
//! Thirty symbols in three families (fruits, animals, flowers). Each has a
//! display glyph and a plain name used for accessible labels.

use serde::{Deserialize, Serialize};

/// A palette entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbol {
    /// Glyph shown on a face-up card.
    pub glyph: &'static str,
    /// Spoken/readable name.
    pub name: &'static str,
}

/// The fixed palette, in selection order.
pub const PALETTE: [Symbol; 30] = [
    Symbol { glyph: "🍎", name: "apple" },
    Symbol { glyph: "🍊", name: "orange" },
    Symbol { glyph: "🍋", name: "lemon" },
    Symbol { glyph: "🍌", name: "banana" },
    Symbol { glyph: "🍇", name: "grapes" },
    Symbol { glyph: "🍓", name: "strawberry" },
    Symbol { glyph: "🍑", name: "peach" },
    Symbol { glyph: "🍒", name: "cherry" },
    Symbol { glyph: "🍉", name: "watermelon" },
    Symbol { glyph: "🍍", name: "pineapple" },
    Symbol { glyph: "🐶", name: "dog" },
    Symbol { glyph: "🐱", name: "cat" },
    Symbol { glyph: "🐭", name: "mouse" },
    Symbol { glyph: "🐹", name: "hamster" },
    Symbol { glyph: "🐰", name: "rabbit" },
    Symbol { glyph: "🦊", name: "fox" },
    Symbol { glyph: "🐻", name: "bear" },
    Symbol { glyph: "🐼", name: "panda" },
    Symbol { glyph: "🐨", name: "koala" },
    Symbol { glyph: "🐯", name: "tiger" },
    Symbol { glyph: "🌸", name: "cherry blossom" },
    Symbol { glyph: "🌺", name: "hibiscus" },
    Symbol { glyph: "🌻", name: "sunflower" },
    Symbol { glyph: "🌷", name: "tulip" },
    Symbol { glyph: "🌹", name: "rose" },
    Symbol { glyph: "💐", name: "bouquet" },
    Symbol { glyph: "🌼", name: "blossom" },
    Symbol { glyph: "🏵️", name: "rosette" },
    Symbol { glyph: "🌿", name: "herb" },
    Symbol { glyph: "🍀", name: "clover" },
];

/// Number of distinct symbols available.
pub const PALETTE_SIZE: usize = PALETTE.len();

/// Index of a symbol in [`PALETTE`].
///
/// Two cards match when their `SymbolId`s are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u8);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw palette index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Look up the palette entry. `None` if the ID is past the palette.
    #[must_use]
    pub fn symbol(self) -> Option<&'static Symbol> {
        PALETTE.get(self.index())
    }

    /// Glyph for display, `"?"` for an unknown ID.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        self.symbol().map_or("?", |s| s.glyph)
    }

    /// Readable name, `"icon"` for an unknown ID.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.symbol().map_or("icon", |s| s.name)
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}
