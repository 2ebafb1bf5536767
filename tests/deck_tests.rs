//! Property tests for deck construction and turn bookkeeping.
//!
//! Decks are checked for pairing and permutation invariants across every
//! valid pair count and many seeds; sessions are driven with arbitrary
//! reveal sequences to check move counting and the lock.

use std::time::Duration;

use proptest::prelude::*;

use memory_pairs::core::{Deck, GameConfig, GameRng, GridSize, PALETTE_SIZE};
use memory_pairs::engine::{PairsGame, RevealOutcome};

proptest! {
    /// A fresh deck has P distinct symbols, each exactly twice, 2P cards.
    #[test]
    fn prop_deck_pairs(pairs in 1..=PALETTE_SIZE, seed in any::<u64>()) {
        let deck = Deck::build(pairs, &mut GameRng::new(seed)).unwrap();
        let counts = deck.symbol_counts();

        prop_assert_eq!(deck.len(), 2 * pairs);
        prop_assert_eq!(counts.len(), pairs);
        prop_assert!(counts.values().all(|&n| n == 2));
        prop_assert!(deck.cards().iter().enumerate().all(|(i, c)| c.position == i && c.is_hidden()));
    }

    /// Shuffling only reorders: the sorted contents are unchanged.
    #[test]
    fn prop_shuffle_is_permutation(mut items in proptest::collection::vec(0u8..50, 0..64), seed in any::<u64>()) {
        let mut expected = items.clone();
        GameRng::new(seed).shuffle(&mut items);

        expected.sort_unstable();
        items.sort_unstable();
        prop_assert_eq!(items, expected);
    }

    /// Moves equal the number of accepted second reveals, whatever the input.
    #[test]
    fn prop_moves_count_pairs_of_reveals(
        seed in any::<u64>(),
        inputs in proptest::collection::vec((0usize..12, 0u64..1500), 0..80),
    ) {
        let config = GameConfig::default().with_grid_size(GridSize::new(10).unwrap()).with_seed(seed);
        let mut game = PairsGame::new(config);
        let mut completed = 0u32;

        for (index, wait) in inputs {
            let was_locked = game.round().locked;
            let outcome = game.reveal(index);

            if was_locked {
                prop_assert!(!outcome.is_accepted());
            }
            if let RevealOutcome::PairPending { .. } = outcome {
                completed += 1;
            }
            prop_assert_eq!(game.round().moves, completed);
            prop_assert!(game.round().revealed.len() <= 2);
            prop_assert!(game.round().matched_pairs as usize <= game.pair_count());

            game.advance(Duration::from_millis(wait));
        }
    }
}

/// Every supported grid size produces a full deck.
#[test]
fn test_every_grid_size_deals() {
    for grid in GridSize::all() {
        let game = PairsGame::new(GameConfig::default().with_grid_size(grid).with_seed(1));
        assert_eq!(game.deck().len(), grid.cards() as usize);
        assert_eq!(game.deck().symbol_counts().len(), grid.pair_count());
    }
}

/// Over many shuffles each card lands in each slot.
#[test]
fn test_shuffle_reaches_every_slot() {
    let mut rng = GameRng::new(5);
    let mut seen = [[false; 8]; 8];

    for _ in 0..2000 {
        let mut items: Vec<usize> = (0..8).collect();
        rng.shuffle(&mut items);
        for (slot, &item) in items.iter().enumerate() {
            seen[item][slot] = true;
        }
    }

    assert!(seen.iter().flatten().all(|&hit| hit));
}
