//! Single-step invariant: each snapshot adds exactly one mark to the last.

use super::super::rules::diff;
use super::super::timeline::Timeline;
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square, which
/// went from empty to a mark.
///
/// Together with the empty seed this makes the board monotonic: a square,
/// once marked, is never overwritten further down the same history.
pub struct SingleStepHistoryInvariant;

impl Invariant<Timeline> for SingleStepHistoryInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.history().windows(2).all(|pair| {
            let Ok(changes) = diff(&pair[1], &pair[0]) else {
                return false;
            };
            match changes.as_slice() {
                [change] => {
                    pair[0].is_vacant(*change.index()) && !change.value().is_empty()
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot marks exactly one previously empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};

    #[test]
    fn test_empty_game_holds() {
        let timeline = Timeline::new(3).unwrap();
        assert!(SingleStepHistoryInvariant::holds(&timeline));
    }

    #[test]
    fn test_played_game_holds() {
        let mut timeline = Timeline::new(3).unwrap();
        for i in [4, 0, 8, 2] {
            timeline.apply_move(i).unwrap();
        }
        assert!(SingleStepHistoryInvariant::holds(&timeline));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut timeline = Timeline::new(3).unwrap();
        timeline.apply_move(4).unwrap();
        timeline.history[1].set(0, Square::Occupied(Player::O)).unwrap();
        assert!(!SingleStepHistoryInvariant::holds(&timeline));
    }

    #[test]
    fn test_overwrite_violates() {
        let mut timeline = Timeline::new(3).unwrap();
        timeline.apply_move(4).unwrap();
        timeline.apply_move(0).unwrap();
        // O lands on X's centre instead of a fresh square
        timeline.history[2].set(0, Square::Empty).unwrap();
        timeline.history[2].set(4, Square::Occupied(Player::O)).unwrap();
        assert!(!SingleStepHistoryInvariant::holds(&timeline));
    }
}
