//! First-class invariants for the game timeline.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Records a violation if invariant `I` fails for `state`.
fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_markers;
pub mod cursor_in_bounds;
pub mod single_step_history;

pub use alternating_markers::AlternatingMarkersInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use single_step_history::SingleStepHistoryInvariant;

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    CursorInBoundsInvariant,
    SingleStepHistoryInvariant,
    AlternatingMarkersInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Timeline;
    use crate::types::{Player, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let timeline = Timeline::new(3).unwrap();
        assert!(TimelineInvariants::check_all(&timeline).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut timeline = Timeline::new(4).unwrap();
        for i in [5, 0, 15, 3] {
            timeline.apply_move(i).unwrap();
        }
        timeline.jump_to(2).unwrap();
        assert!(TimelineInvariants::check_all(&timeline).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut timeline = Timeline::new(3).unwrap();
        timeline.apply_move(4).unwrap();
        timeline.history[0].set(0, Square::Occupied(Player::O)).unwrap();

        let violations = TimelineInvariants::check_all(&timeline).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let timeline = Timeline::new(3).unwrap();

        type TwoInvariants = (CursorInBoundsInvariant, AlternatingMarkersInvariant);
        assert!(TwoInvariants::check_all(&timeline).is_ok());
    }
}
