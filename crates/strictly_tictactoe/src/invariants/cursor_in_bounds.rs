//! Cursor invariant: the cursor points into a history seeded by an empty board.

use super::super::timeline::Timeline;
use super::Invariant;

/// Invariant: `0 <= current_step < len` and `history[0]` is empty.
pub struct CursorInBoundsInvariant;

impl Invariant<Timeline> for CursorInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let seeded = timeline.history().first().is_some_and(|board| {
            board.side() == timeline.side() && board.squares().iter().all(|s| s.is_empty())
        });
        seeded && timeline.current_step() < timeline.len()
    }

    fn description() -> &'static str {
        "History starts empty and the cursor stays inside it"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};

    #[test]
    fn test_new_game_holds() {
        let timeline = Timeline::new(5).unwrap();
        assert!(CursorInBoundsInvariant::holds(&timeline));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut timeline = Timeline::new(3).unwrap();
        timeline.current_step = 1;
        assert!(!CursorInBoundsInvariant::holds(&timeline));
    }

    #[test]
    fn test_marked_seed_violates() {
        let mut timeline = Timeline::new(3).unwrap();
        timeline.history[0].set(2, Square::Occupied(Player::X)).unwrap();
        assert!(!CursorInBoundsInvariant::holds(&timeline));
    }
}
