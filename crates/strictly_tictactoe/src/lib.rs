//! Strictly Tic-Tac-Toe - N×N game state with time travel
//!
//! This library holds the game state for tic-tac-toe on any square board,
//! together with the full move history.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over one snapshot (winning lines, win/draw
//!   evaluation, positional diff)
//! - **Timeline**: ordered snapshots, a playback cursor and the move list
//!   order; accepts moves, jumps in time and renders view models
//! - **Contracts**: move preconditions and debug-build postconditions
//!   backed by first-class invariants
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Player, Status, Timeline};
//!
//! # fn example() -> Result<(), strictly_tictactoe::TicTacToeError> {
//! let mut game = Timeline::new(3)?;
//! game.apply_move(4)?;
//! assert_eq!(game.next_mover(), Player::O);
//!
//! // Taken squares are ignored, not errors
//! assert!(!game.apply_move(4)?.is_applied());
//!
//! game.jump_to(0)?;
//! assert_eq!(game.current_view().status(), &Status::NextPlayer(Player::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod error;
mod invariants;
mod position;
mod rules;
mod timeline;
mod types;
mod view;

// Crate-level exports - Errors
pub use error::{ErrorKind, TicTacToeError, TicTacToeResult};

// Crate-level exports - Board types
pub use position::Coordinate;
pub use types::{Board, Player, Square, side_for};

// Crate-level exports - Rules
pub use rules::{
    CellChange, Line, LineKind, Verdict, check_winner, diff, evaluate, evaluate_lines,
    generate_lines, is_full, lines_for_side,
};

// Crate-level exports - Moves and contracts
pub use action::{Move, MoveOutcome, Rejection};
pub use contracts::{Contract, GameNotOver, MoveContract, SquareIsEmpty};
pub use invariants::{
    AlternatingMarkersInvariant, CursorInBoundsInvariant, Invariant, InvariantSet,
    InvariantViolation, SingleStepHistoryInvariant, TimelineInvariants,
};

// Crate-level exports - Timeline and views
pub use timeline::Timeline;
pub use view::{CurrentView, SortOrder, Status, TimelineEntry};
