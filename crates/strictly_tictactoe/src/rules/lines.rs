//! Winning line generation for boards of any side length.

use crate::error::TicTacToeResult;
use crate::types::side_for;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which family a winning line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Row `i`, left to right.
    #[display("row {}", _0)]
    Row(usize),
    /// Column `i`, top to bottom.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// A candidate winning line: exactly `side` board indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Line {
    /// Row, column or diagonal.
    kind: LineKind,
    /// Board indices on the line, in traversal order.
    cells: Vec<usize>,
}

/// Generates every winning line for a board of `side × side` cells.
///
/// Emission order is fixed: rows top to bottom, columns left to right,
/// then the main diagonal and the anti-diagonal. Win detection uses this
/// order as its tie-break, so it must stay stable.
#[instrument]
pub fn lines_for_side(side: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 * side + 2);

    // Rows
    for i in 0..side {
        lines.push(Line {
            kind: LineKind::Row(i),
            cells: (0..side).map(|j| i * side + j).collect(),
        });
    }

    // Columns
    for i in 0..side {
        lines.push(Line {
            kind: LineKind::Column(i),
            cells: (0..side).map(|j| i + j * side).collect(),
        });
    }

    // Diagonals
    lines.push(Line {
        kind: LineKind::Diagonal,
        cells: (0..side).map(|i| i * side + i).collect(),
    });
    lines.push(Line {
        kind: LineKind::AntiDiagonal,
        cells: (0..side).map(|i| i * side + (side - 1 - i)).collect(),
    });

    lines
}

/// Generates every winning line for a board with `cell_count` cells.
///
/// # Errors
///
/// Returns `NotPerfectSquare` if `cell_count` is zero or not a perfect square.
#[instrument]
pub fn generate_lines(cell_count: usize) -> TicTacToeResult<Vec<Line>> {
    let side = side_for(cell_count)?;
    Ok(lines_for_side(side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_classic_board_lines() {
        let lines = generate_lines(9).unwrap();
        let cells: Vec<Vec<usize>> = lines.iter().map(|l| l.cells().clone()).collect();
        assert_eq!(
            cells,
            vec![
                vec![0, 1, 2],
                vec![3, 4, 5],
                vec![6, 7, 8],
                vec![0, 3, 6],
                vec![1, 4, 7],
                vec![2, 5, 8],
                vec![0, 4, 8],
                vec![2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_line_kinds_in_order() {
        let lines = lines_for_side(2);
        let kinds: Vec<LineKind> = lines.iter().map(|l| *l.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Row(0),
                LineKind::Row(1),
                LineKind::Column(0),
                LineKind::Column(1),
                LineKind::Diagonal,
                LineKind::AntiDiagonal,
            ]
        );
    }

    #[test]
    fn test_single_cell_board() {
        let lines = generate_lines(1).unwrap();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.cells() == &vec![0]));
    }

    #[test]
    fn test_rejects_non_square() {
        let err = generate_lines(8).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::NotPerfectSquare(8));
    }
}
