//! Error types for board and timeline contract violations.

use derive_more::{Display, Error};
use tracing::instrument;

/// The specific contract that a caller broke.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ErrorKind {
    /// A snapshot length that is zero or not a perfect square.
    #[display("Board length {} is not a non-zero perfect square", _0)]
    NotPerfectSquare(usize),

    /// A side length of zero, or one whose square overflows.
    #[display("Invalid board side {}", _0)]
    InvalidSide(usize),

    /// Two snapshots of different lengths were compared.
    #[display("Cannot diff boards of length {} and {}", left, right)]
    LengthMismatch {
        /// Length of the first board.
        left: usize,
        /// Length of the second board.
        right: usize,
    },

    /// A cell index outside the board.
    #[display("Index {} is out of range for a board of {} cells", index, cells)]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// A history step outside the timeline.
    #[display("Step {} is out of range for a history of {} entries", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },

    /// A postcondition failed after a move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

/// Tic-tac-toe error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Tic-tac-toe error: {} at {}:{}", kind, file, line)]
pub struct TicTacToeError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TicTacToeError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the kind of contract violation.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for TicTacToeError {
    #[track_caller]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result alias used throughout the crate.
pub type TicTacToeResult<T> = Result<T, TicTacToeError>;
