//! Property tests for move generation, scoring, and the alpha-beta search.

use proptest::prelude::*;

use red_blue_nim::board::{Move, Pile, Position, Variant};
use red_blue_nim::eval::{evaluate_terminal, SCORE_INF};
use red_blue_nim::movegen::{apply_move, legal_moves, root_moves};
use red_blue_nim::search::{
    full_width_minimax, minimax, search, search_parallel, SearchConfig,
};

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Standard), Just(Variant::Misere)]
}

/// Orders moves the way the canonical list must appear.
fn expected_moves(pos: &Position) -> Vec<Move> {
    [
        Move::new(Pile::Red, 2),
        Move::new(Pile::Blue, 2),
        Move::new(Pile::Red, 1),
        Move::new(Pile::Blue, 1),
    ]
    .into_iter()
    .filter(|m| pos.count(m.pile) >= m.amount)
    .collect()
}

proptest! {
    #[test]
    fn legal_moves_are_legal_and_ordered(red in 0u32..50, blue in 0u32..50) {
        let pos = Position::new(red, blue);
        let moves = legal_moves(&pos);
        prop_assert_eq!(&moves, &expected_moves(&pos));
        for mv in moves {
            prop_assert!(apply_move(&pos, mv).is_ok());
        }
    }

    #[test]
    fn root_moves_are_a_permutation(red in 0u32..10, blue in 0u32..10) {
        let pos = Position::new(red, blue);
        let mut a = legal_moves(&pos);
        let mut b = root_moves(&pos);
        a.sort_by_key(|m| (m.amount, m.pile as u8));
        b.sort_by_key(|m| (m.amount, m.pile as u8));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn terminal_iff_a_pile_is_empty(red in 0u32..20, blue in 0u32..20) {
        let pos = Position::new(red, blue);
        prop_assert_eq!(pos.is_terminal(), red == 0 || blue == 0);
    }

    #[test]
    fn variants_are_mirror_images(n in 0u32..100, red_empty in any::<bool>()) {
        let pos = if red_empty { Position::new(0, n) } else { Position::new(n, 0) };
        prop_assert_eq!(
            evaluate_terminal(&pos, Variant::Standard),
            -evaluate_terminal(&pos, Variant::Misere)
        );
    }

    #[test]
    fn depth_zero_is_neutral(
        red in 1u32..100,
        blue in 1u32..100,
        maximizing in any::<bool>(),
        v in variant(),
    ) {
        let pos = Position::new(red, blue);
        prop_assert_eq!(minimax(&pos, 0, maximizing, -SCORE_INF, SCORE_INF, v), 0);
    }

    #[test]
    fn pruning_does_not_change_value(
        red in 0u32..9,
        blue in 0u32..9,
        depth in 0u32..7,
        maximizing in any::<bool>(),
        v in variant(),
    ) {
        let pos = Position::new(red, blue);
        prop_assert_eq!(
            minimax(&pos, depth, maximizing, -SCORE_INF, SCORE_INF, v),
            full_width_minimax(&pos, depth, maximizing, v)
        );
    }

    #[test]
    fn search_returns_legal_move(
        red in 1u32..15,
        blue in 1u32..15,
        depth in 0u32..5,
        v in variant(),
    ) {
        let pos = Position::new(red, blue);
        let result = search(&pos, v, &SearchConfig::with_depth(depth)).unwrap();
        prop_assert!(apply_move(&pos, result.best_move).is_ok());
    }

    #[test]
    fn parallel_root_agrees(
        red in 1u32..12,
        blue in 1u32..12,
        depth in 0u32..5,
        v in variant(),
    ) {
        let pos = Position::new(red, blue);
        let config = SearchConfig::with_depth(depth);
        prop_assert_eq!(
            search(&pos, v, &config).unwrap(),
            search_parallel(&pos, v, &config).unwrap()
        );
    }
}

#[test]
fn search_two_by_two_standard() {
    let result = search(&Position::new(2, 2), Variant::Standard, &SearchConfig::default()).unwrap();
    assert_eq!(result.best_move, Move::new(Pile::Blue, 1));
    assert_eq!(result.score, -4);
}

#[test]
fn search_score_matches_full_width_root() {
    // The chosen score equals the unpruned value of the chosen child.
    for red in 1..=6 {
        for blue in 1..=6 {
            for v in [Variant::Standard, Variant::Misere] {
                let pos = Position::new(red, blue);
                let result = search(&pos, v, &SearchConfig::default()).unwrap();
                let child = apply_move(&pos, result.best_move).unwrap();
                assert_eq!(result.score, full_width_minimax(&child, 3, false, v));
            }
        }
    }
}
