//! First-class move types.
//!
//! A move is a domain event: the player, the square, and the history step
//! it produced. Rejected moves are reported as values, not errors.

use super::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Move {
    /// History step created by this move.
    step: usize,
    /// The player who moved.
    player: Player,
    /// Board index that was marked.
    index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(step: usize, player: Player, index: usize) -> Self {
        Self {
            step,
            player,
            index,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}: {} -> {}", self.step, self.player, self.index)
    }
}

/// Why a move was ignored.
///
/// These are benign: repeated clicks on a taken square or a finished game
/// leave the timeline untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The game at the current step is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),
}

/// Result of asking the timeline to play a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded as a new history entry.
    Applied(Move),
    /// Nothing changed.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// True if the move produced a new snapshot.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}
