//! Game rules for N×N tic-tac-toe.
//!
//! This module contains pure functions over single board snapshots:
//! winning-line generation, win and draw detection, and the positional
//! diff between two snapshots. Nothing here holds state.

pub mod diff;
pub mod draw;
pub mod lines;
pub mod win;

pub use diff::{CellChange, diff};
pub use draw::is_full;
pub use lines::{Line, LineKind, generate_lines, lines_for_side};
pub use win::{Verdict, check_winner, evaluate, evaluate_lines};
