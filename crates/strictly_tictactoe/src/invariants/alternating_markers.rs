//! Alternating marker invariant: X, O, X, O, ... down the history.

use super::super::rules::diff;
use super::super::timeline::Timeline;
use super::super::types::{Player, Square};
use super::Invariant;

/// Invariant: the move from step `k` to `k + 1` places `Player::for_step(k)`.
///
/// This is what lets whose-turn be derived from the cursor alone.
pub struct AlternatingMarkersInvariant;

impl Invariant<Timeline> for AlternatingMarkersInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .history()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| match diff(&pair[1], &pair[0]) {
                Ok(changes) => changes
                    .iter()
                    .all(|c| *c.value() == Square::Occupied(Player::for_step(k))),
                Err(_) => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
