//! Win and draw evaluation for a single snapshot.

use super::lines::{Line, lines_for_side};
use crate::types::{Board, Player, Square};
use serde::Serialize;
use tracing::{debug, instrument};

/// Outcome of evaluating one board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// No completed line and at least one empty square.
    InProgress,
    /// A player completed `line`.
    Won {
        /// The player owning every square on the line.
        winner: Player,
        /// The first completed line in emission order.
        line: Line,
    },
    /// Every square is occupied and no line is complete.
    Draw,
}

impl Verdict {
    /// True once the game has concluded by win or draw.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Verdict::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Indices to highlight; empty unless someone won.
    pub fn winning_cells(&self) -> &[usize] {
        match self {
            Verdict::Won { line, .. } => line.cells(),
            _ => &[],
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Verdict::Draw)
    }
}

/// Returns the first line, in emission order, fully held by one player.
#[instrument(skip(board, lines), fields(side = board.side()))]
pub fn check_winner<'a>(board: &Board, lines: &'a [Line]) -> Option<(Player, &'a Line)> {
    lines.iter().find_map(|line| {
        let mut cells = line.cells().iter().map(|&i| board.get(i));
        let first = cells.next()??;
        let Square::Occupied(player) = first else {
            return None;
        };
        cells
            .all(|sq| sq == Some(first))
            .then_some((player, line))
    })
}

/// Evaluates `board` against a precomputed line set.
///
/// The lines must have been generated for this board's side.
#[instrument(skip(board, lines), fields(side = board.side()))]
pub fn evaluate_lines(board: &Board, lines: &[Line]) -> Verdict {
    let verdict = if let Some((winner, line)) = check_winner(board, lines) {
        Verdict::Won {
            winner,
            line: line.clone(),
        }
    } else if super::draw::is_full(board) {
        Verdict::Draw
    } else {
        Verdict::InProgress
    };
    debug!(?verdict, "Evaluated board");
    verdict
}

/// Evaluates a snapshot for a win or draw.
///
/// The board's side is fixed at construction, so malformed lengths are
/// rejected before they can get here.
#[instrument(skip(board), fields(side = board.side()))]
pub fn evaluate(board: &Board) -> Verdict {
    evaluate_lines(board, &lines_for_side(board.side()))
}
