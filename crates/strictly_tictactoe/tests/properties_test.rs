//! Randomized properties of the analyzer and timeline.

use proptest::prelude::*;
use std::collections::HashSet;
use strictly_tictactoe::{
    Board, InvariantSet, Player, Square, Timeline, TimelineInvariants, diff, lines_for_side,
};

/// A side length and a sequence of raw move indices for that board.
fn game() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1usize..=6).prop_flat_map(|side| (Just(side), prop::collection::vec(0..side * side, 0..40)))
}

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

/// Two boards of the same side.
fn board_pair() -> impl Strategy<Value = (Board, Board)> {
    (1usize..=6).prop_flat_map(|side| {
        let cells = side * side;
        (
            prop::collection::vec(square(), cells),
            prop::collection::vec(square(), cells),
        )
            .prop_map(|(a, b)| {
                (
                    Board::from_squares(a).expect("square length"),
                    Board::from_squares(b).expect("square length"),
                )
            })
    })
}

proptest! {
    #[test]
    fn line_set_has_expected_shape(side in 1usize..=12) {
        let lines = lines_for_side(side);
        prop_assert_eq!(lines.len(), 2 * side + 2);
        for line in &lines {
            let distinct: HashSet<usize> = line.cells().iter().copied().collect();
            prop_assert_eq!(line.cells().len(), side);
            prop_assert_eq!(distinct.len(), side);
            prop_assert!(line.cells().iter().all(|&i| i < side * side));
        }
    }

    #[test]
    fn diff_indices_are_symmetric((a, b) in board_pair()) {
        let forward: HashSet<usize> = diff(&a, &b).unwrap().iter().map(|c| *c.index()).collect();
        let backward: HashSet<usize> = diff(&b, &a).unwrap().iter().map(|c| *c.index()).collect();
        prop_assert_eq!(forward, backward);
        prop_assert!(diff(&a, &a).unwrap().is_empty());
    }

    #[test]
    fn played_games_keep_invariants((side, moves) in game()) {
        let mut timeline = Timeline::new(side).unwrap();
        for index in moves {
            let len = timeline.len();
            let outcome = timeline.apply_move(index).unwrap();
            if outcome.is_applied() {
                prop_assert_eq!(timeline.len(), timeline.current_step() + 1);
            } else {
                prop_assert_eq!(timeline.len(), len);
            }
            prop_assert!(TimelineInvariants::check_all(&timeline).is_ok());
        }

        // Every consecutive pair differs by exactly one cell
        for pair in timeline.history().windows(2) {
            prop_assert_eq!(diff(&pair[1], &pair[0]).unwrap().len(), 1);
        }
    }

    #[test]
    fn jump_round_trip_restores_view((side, moves) in game(), pick in any::<prop::sample::Index>()) {
        let mut timeline = Timeline::new(side).unwrap();
        for index in moves {
            timeline.apply_move(index).unwrap();
        }
        let original = timeline.current_step();
        let view = timeline.current_view();

        timeline.jump_to(pick.index(timeline.len())).unwrap();
        prop_assert_eq!(timeline.next_mover(), Player::for_step(timeline.current_step()));

        timeline.jump_to(original).unwrap();
        prop_assert_eq!(timeline.current_view(), view);
    }

    #[test]
    fn toggling_only_reverses_the_move_list((side, moves) in game(), pick in any::<prop::sample::Index>()) {
        let mut timeline = Timeline::new(side).unwrap();
        for index in moves {
            timeline.apply_move(index).unwrap();
        }
        timeline.jump_to(pick.index(timeline.len())).unwrap();

        let ascending = timeline.render_timeline().unwrap();
        timeline.toggle_order();
        let mut descending = timeline.render_timeline().unwrap();
        descending.reverse();

        prop_assert_eq!(ascending, descending);
    }
}
