//! Turn engine integration tests.
//!
//! These tests drive `PairsGame` through whole turns and rounds on the
//! virtual clock:
//! - Match and mismatch resolution after their settle delays
//! - Move counting and win detection
//! - Timer start, ticking and freezing
//! - Resets cancelling work scheduled by the previous round

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use memory_pairs::core::{CardFace, Deck, GameConfig, GameEvent, Phase, SymbolId, QUEUE_LIMIT};
use memory_pairs::engine::{PairsGame, RejectReason, RevealOutcome};
use memory_pairs::GridSize;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Four pairs laid out A B C D B A D C.
///
/// Symbols: A=0, B=1, C=2, D=3 (pairs at 0/5, 1/4, 2/7, 3/6).
fn four_pair_game() -> PairsGame {
    let s = SymbolId::new;
    let deck = Deck::from_symbols(vec![s(0), s(1), s(2), s(3), s(1), s(0), s(3), s(2)]);
    PairsGame::with_deck(GameConfig::default(), deck)
}

fn solve(game: &mut PairsGame) {
    while let Some(&first) = game.selectable().first() {
        let second = game.deck().partner_of(first).unwrap();
        game.reveal(first);
        game.reveal(second);
        game.advance(ms(600));
    }
}

/// P=4, reveal 0 (A) then 5 (A): both matched after the settle delay.
#[test]
fn test_matching_pair_scenario() {
    let mut game = four_pair_game();
    assert_eq!(game.deck().len(), 8);

    assert_eq!(game.reveal(0), RevealOutcome::Revealed);
    assert_eq!(game.reveal(5), RevealOutcome::PairPending { matched: true });
    game.advance(ms(600));

    assert_eq!(game.deck().card(0).unwrap().face, CardFace::Matched);
    assert_eq!(game.deck().card(5).unwrap().face, CardFace::Matched);
    assert_eq!(game.round().matched_pairs, 1);
    assert_eq!(game.round().moves, 1);
    assert_eq!(game.phase(), Phase::Idle);
}

/// P=4, reveal 0 (A) then 1 (B): both hidden again after the settle delay.
#[test]
fn test_mismatching_pair_scenario() {
    let mut game = four_pair_game();

    game.reveal(0);
    assert_eq!(game.reveal(1), RevealOutcome::PairPending { matched: false });
    game.advance(ms(1000));

    assert_eq!(game.deck().card(0).unwrap().face, CardFace::Hidden);
    assert_eq!(game.deck().card(1).unwrap().face, CardFace::Hidden);
    assert_eq!(game.round().moves, 1);
    assert_eq!(game.round().matched_pairs, 0);
    assert!(game.round().revealed.is_empty());
    assert!(!game.round().locked);
}

/// A new game must drop a pending mismatch so it cannot touch the new deal.
#[test]
fn test_new_game_cancels_pending_mismatch() {
    let mut game = four_pair_game();
    game.reveal(0);
    game.reveal(1);
    game.drain_events();

    game.new_game();

    // Flip a card in the new round, then let the old delay elapse
    game.reveal(1);
    game.advance(ms(5000));

    assert!(game.deck().card(1).unwrap().is_revealed());
    assert_eq!(game.round().moves, 0);
    assert_eq!(game.round().revealed.as_slice(), &[1]);

    let events = game.drain_events();
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::PairHidden { .. } | GameEvent::PairMatched { .. })));
}

/// A new game must also drop a pending match and win.
#[test]
fn test_new_game_cancels_pending_win() {
    let s = SymbolId::new;
    let mut game = PairsGame::with_deck(
        GameConfig::default().with_grid_size(GridSize::MIN),
        Deck::from_symbols(vec![s(0), s(0)]),
    );
    game.reveal(0);
    game.reveal(1);
    game.advance(ms(600));
    assert!(game.deck().is_complete());
    assert!(!game.is_won());

    game.new_game();
    game.advance(ms(10_000));

    assert!(!game.is_won());
    assert_eq!(game.deck().len(), 8);
    assert_eq!(game.round().matched_pairs, 0);
    assert_eq!(game.round().elapsed_seconds(), 0);
}

/// Revealing the same card twice before resolution is a no-op.
#[test]
fn test_double_reveal_is_noop() {
    let mut game = four_pair_game();
    game.reveal(2);
    let before = game.snapshot();

    assert_eq!(game.reveal(2), RevealOutcome::Rejected(RejectReason::AlreadyRevealed));
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.phase(), Phase::OneRevealed);
}

/// Rejected reveals emit nothing.
#[test]
fn test_rejections_have_no_effect() {
    let mut game = four_pair_game();
    game.drain_events();

    assert!(!game.reveal(99).is_accepted());
    assert!(!game.reveal(usize::MAX).is_accepted());
    assert!(game.drain_events().is_empty());
    assert_eq!(game.round().elapsed_seconds(), 0);
    assert_eq!(game.next_deadline(), None);

    game.reveal(0);
    game.reveal(1);
    let locked = game.snapshot();
    assert_eq!(game.reveal(2), RevealOutcome::Rejected(RejectReason::Locked));
    assert_eq!(game.snapshot(), locked);
}

/// One move per pair of reveals, never for a single reveal.
#[test]
fn test_move_counting() {
    let mut game = four_pair_game();

    game.reveal(0);
    assert_eq!(game.round().moves, 0);
    game.reveal(1);
    assert_eq!(game.round().moves, 1);
    game.advance(ms(1000));

    game.reveal(1);
    assert_eq!(game.round().moves, 1);
    game.reveal(4);
    assert_eq!(game.round().moves, 2);
}

/// Solving the board reaches Won after the win delay and freezes the timer.
#[test]
fn test_win_freezes_timer() {
    let mut game = four_pair_game();
    game.reveal(0);
    game.reveal(5);
    game.advance(ms(2000));
    assert_eq!(game.round().elapsed_seconds(), 2);

    solve(&mut game);
    assert!(game.deck().is_complete());
    assert!(!game.is_won());

    game.advance(ms(500));
    assert!(game.is_won());
    assert_eq!(game.phase(), Phase::Won);

    let frozen = game.round().elapsed_seconds();
    game.drain_events();
    game.advance(ms(60_000));

    assert_eq!(game.round().elapsed_seconds(), frozen);
    assert!(game.drain_events().is_empty());
    assert_eq!(game.reveal(0), RevealOutcome::Rejected(RejectReason::RoundOver));
}

/// Won is reached only once every pair is matched.
#[test]
fn test_won_iff_all_pairs_matched() {
    let mut game = four_pair_game();
    let pairs = [(0, 5), (1, 4), (2, 7), (3, 6)];

    for (n, &(a, b)) in pairs.iter().enumerate() {
        assert!(!game.is_won());
        game.reveal(a);
        game.reveal(b);
        game.advance(ms(1200));
        assert_eq!(game.round().matched_pairs as usize, n + 1);
    }

    assert!(game.is_won());
    assert_eq!(game.round().moves, 4);
}

/// Event stream for a full mismatch then match.
#[test]
fn test_event_sequence() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut game = four_pair_game();

    let sink = Rc::clone(&seen);
    game.subscribe(move |e| sink.borrow_mut().push(e.clone()));

    game.reveal(0);
    game.reveal(1);
    game.advance(ms(1000));
    game.reveal(0);
    game.reveal(5);
    game.advance(ms(600));

    let seen = seen.borrow();
    assert_eq!(
        *seen,
        vec![
            GameEvent::CardRevealed { index: 0 },
            GameEvent::CardRevealed { index: 1 },
            GameEvent::MoveCounted { moves: 1 },
            GameEvent::TimerTicked { seconds: 1 },
            GameEvent::PairHidden { first: 0, second: 1 },
            GameEvent::CardRevealed { index: 0 },
            GameEvent::CardRevealed { index: 5 },
            GameEvent::MoveCounted { moves: 2 },
            GameEvent::PairMatched { first: 0, second: 5 },
        ]
    );
}

/// Unsubscribed listeners stop receiving events; polling still works.
#[test]
fn test_unsubscribe_and_poll() {
    let count = Rc::new(RefCell::new(0));
    let mut game = four_pair_game();
    game.drain_events();

    let counter = Rc::clone(&count);
    let id = game.subscribe(move |_| *counter.borrow_mut() += 1);
    game.reveal(0);
    assert!(game.unsubscribe(id));
    game.reveal(1);

    assert_eq!(*count.borrow(), 1);
    assert_eq!(game.drain_events().len(), 3);
}

/// A listener-only session running for an hour keeps a bounded queue.
#[test]
fn test_long_session_queue_is_bounded() {
    let ticks = Rc::new(RefCell::new(0u64));
    let mut game = four_pair_game();

    let sink = Rc::clone(&ticks);
    game.subscribe(move |e| {
        if let GameEvent::TimerTicked { .. } = e {
            *sink.borrow_mut() += 1;
        }
    });
    game.reveal(0);
    game.advance(Duration::from_secs(3600));

    assert_eq!(*ticks.borrow(), 3600);
    let events = game.drain_events();
    assert_eq!(events.len(), QUEUE_LIMIT);
    assert_eq!(events.last(), Some(&GameEvent::TimerTicked { seconds: 3600 }));
}

/// With polling off, listeners still see everything and nothing is queued.
#[test]
fn test_polling_off_queues_nothing() {
    let seen = Rc::new(RefCell::new(0usize));
    let mut game = four_pair_game();
    game.set_polling(false);

    let sink = Rc::clone(&seen);
    game.subscribe(move |_| *sink.borrow_mut() += 1);
    game.reveal(0);
    game.reveal(1);
    game.advance(Duration::from_secs(3600));

    assert_eq!(*seen.borrow(), 3 + 3600 + 1);
    assert!(game.drain_events().is_empty());
}

/// Ticks keep one-second spacing across a single long advance.
#[test]
fn test_long_advance_counts_every_second() {
    let mut game = four_pair_game();
    game.reveal(0);
    game.advance(ms(125_400));

    assert_eq!(game.round().elapsed_seconds(), 125);
    assert_eq!(game.snapshot().elapsed_display, "2:05");
    assert_eq!(game.next_deadline(), Some(ms(600)));
}

/// Zero delays settle on `advance(ZERO)`.
#[test]
fn test_instant_config() {
    let s = SymbolId::new;
    let mut game = PairsGame::with_deck(
        GameConfig::default().instant(),
        Deck::from_symbols(vec![s(0), s(1), s(0), s(1)]),
    );

    game.reveal(0);
    game.reveal(2);
    game.advance(Duration::ZERO);
    assert_eq!(game.round().matched_pairs, 1);

    game.reveal(1);
    game.reveal(3);
    game.advance(Duration::ZERO);
    assert!(game.is_won());
}

/// Changing grid size deals a fresh round of the new size.
#[test]
fn test_grid_size_change_resets() {
    let mut game = PairsGame::new(GameConfig::default().with_seed(11));
    game.reveal(0);
    game.advance(ms(3000));

    game.set_grid_size(GridSize::new(24).unwrap());

    assert_eq!(game.deck().len(), 24);
    assert_eq!(game.pair_count(), 12);
    assert!(game.round().is_fresh());
    assert_eq!(game.round().elapsed_seconds(), 0);
    assert_eq!(game.next_deadline(), None);
    assert!(game.deck().cards().iter().all(|c| c.is_hidden()));
}

/// Same seed, same deals across rounds.
#[test]
fn test_seeded_sessions_replay() {
    let config = GameConfig::default().with_seed(2024);
    let mut a = PairsGame::new(config.clone());
    let mut b = PairsGame::new(config);

    assert_eq!(a.deck(), b.deck());
    a.new_game();
    b.new_game();
    assert_eq!(a.deck(), b.deck());
    assert_eq!(a.seed(), 2024);
}

/// The snapshot hides face-down symbols.
#[test]
fn test_snapshot_hides_symbols() {
    let mut game = four_pair_game();
    game.reveal(3);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.grid_size, 8);
    assert_eq!(snapshot.pair_count, 4);
    for card in &snapshot.cards {
        if card.position == 3 {
            assert_eq!(card.symbol, Some(SymbolId::new(3)));
        } else {
            assert_eq!(card.symbol, None);
        }
    }

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"OneRevealed\""));
}
