//! Contract-based validation for timeline moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::Rejection;
use super::error::{ErrorKind, TicTacToeError, TicTacToeResult};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::timeline::Timeline;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    ///
    /// A failed precondition is a benign rejection, not an error.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> TicTacToeResult<()>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The board at the current step is not yet decided.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a won or drawn board.
    #[instrument(skip(timeline))]
    pub fn check(timeline: &Timeline) -> Result<(), Rejection> {
        if timeline.current_verdict().is_decided() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The targeted square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves on an occupied square.
    #[instrument(skip(timeline))]
    pub fn check(index: usize, timeline: &Timeline) -> Result<(), Rejection> {
        if timeline.current_board().is_vacant(index) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(index))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a square.
///
/// Preconditions:
/// - Board at the current step is undecided
/// - Square must be empty
///
/// Postconditions:
/// - Exactly one snapshot was added after the old cursor
/// - All timeline invariants hold
pub struct MoveContract;

impl Contract<Timeline, usize> for MoveContract {
    fn pre(timeline: &Timeline, index: &usize) -> Result<(), Rejection> {
        GameNotOver::check(timeline)?;
        SquareIsEmpty::check(*index, timeline)
    }

    fn post(before: &Timeline, after: &Timeline) -> TicTacToeResult<()> {
        if after.len() != before.current_step() + 2
            || after.current_step() != before.current_step() + 1
        {
            warn!(
                before_step = before.current_step(),
                after_step = after.current_step(),
                after_len = after.len(),
                "Move did not append exactly one snapshot"
            );
            return Err(TicTacToeError::new(ErrorKind::InvariantViolation(
                "Postcondition failed: move must append exactly one snapshot".to_string(),
            )));
        }

        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Timeline invariants violated");
            TicTacToeError::new(ErrorKind::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let timeline = Timeline::new(3).unwrap();
        assert!(MoveContract::pre(&timeline, &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut timeline = Timeline::new(3).unwrap();
        timeline.apply_move(4).unwrap();
        assert_eq!(
            MoveContract::pre(&timeline, &4),
            Err(Rejection::SquareOccupied(4))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let mut timeline = Timeline::new(2).unwrap();
        // X at 0, O at 2, X at 1 completes the top row.
        for i in [0, 2, 1] {
            timeline.apply_move(i).unwrap();
        }
        assert_eq!(MoveContract::pre(&timeline, &3), Err(Rejection::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Timeline::new(3).unwrap();
        let mut after = before.clone();
        after.apply_move(0).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Timeline::new(3).unwrap();
        let mut after = before.clone();
        after.apply_move(0).unwrap();

        // Sneak an extra mark into the new snapshot
        after.history[1]
            .set(8, Square::Occupied(Player::O))
            .unwrap();

        let err = MoveContract::post(&before, &after).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvariantViolation(_)));
    }
}
