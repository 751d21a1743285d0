//! Core domain types for N×N tic-tac-toe.

use super::error::{ErrorKind, TicTacToeError, TicTacToeResult};
use super::position::Coordinate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player who moves from the given history step.
    ///
    /// X always opens, so even steps belong to X.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, "-"),
            Square::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// Returns the side length of a square board with `cell_count` cells.
///
/// Uses an integer square root so large boards never hit floating point
/// rounding.
#[instrument]
pub fn side_for(cell_count: usize) -> TicTacToeResult<usize> {
    let side = cell_count.isqrt();
    if cell_count == 0 || side * side != cell_count {
        return Err(TicTacToeError::new(ErrorKind::NotPerfectSquare(cell_count)));
    }
    Ok(side)
}

/// One snapshot of an N×N board.
///
/// Squares are stored in row-major order. The side length is fixed at
/// construction and carried alongside the squares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Square>", into = "Vec<Square>")]
pub struct Board {
    side: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board with `side × side` squares.
    #[instrument]
    pub fn new(side: usize) -> TicTacToeResult<Self> {
        let cells = side
            .checked_mul(side)
            .filter(|cells| *cells > 0)
            .ok_or_else(|| TicTacToeError::new(ErrorKind::InvalidSide(side)))?;
        Ok(Self {
            side,
            squares: vec![Square::Empty; cells],
        })
    }

    /// Builds a board from squares in row-major order.
    ///
    /// The length must be a non-zero perfect square.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(squares: Vec<Square>) -> TicTacToeResult<Self> {
        let side = side_for(squares.len())?;
        Ok(Self { side, squares })
    }

    /// Returns the side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the number of cells (`side²`).
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Always false; boards have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> TicTacToeResult<()> {
        let cells = self.len();
        let slot = self
            .squares
            .get_mut(index)
            .ok_or_else(|| TicTacToeError::new(ErrorKind::IndexOutOfRange { index, cells }))?;
        *slot = square;
        Ok(())
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Indices of all empty squares, ascending.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Maps an index on this board to its column/row coordinate.
    pub fn coordinate(&self, index: usize) -> Coordinate {
        Coordinate::from_index(index, self.side)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their index so a player can type it back.
    pub fn display(&self) -> String {
        let width = (self.len() - 1).to_string().len().max(1);
        let divider = vec!["-".repeat(width); self.side].join("+");
        let rows: Vec<String> = self
            .squares
            .chunks(self.side)
            .enumerate()
            .map(|(row, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(col, square)| match square {
                        Square::Empty => format!("{:>width$}", row * self.side + col),
                        Square::Occupied(player) => format!("{:>width$}", player.to_string()),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join(&format!("\n{}\n", divider))
    }
}

impl TryFrom<Vec<Square>> for Board {
    type Error = TicTacToeError;

    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        Board::from_squares(squares)
    }
}

impl From<Board> for Vec<Square> {
    fn from(board: Board) -> Self {
        board.squares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_for_perfect_squares() {
        assert_eq!(side_for(1).unwrap(), 1);
        assert_eq!(side_for(9).unwrap(), 3);
        assert_eq!(side_for(10_000).unwrap(), 100);
    }

    #[test]
    fn test_side_for_rejects_non_squares() {
        for len in [0, 2, 8, 10, 99] {
            let err = side_for(len).unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::NotPerfectSquare(len));
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.side(), 4);
        assert_eq!(board.len(), 16);
        assert_eq!(board.valid_moves().len(), 16);
        assert!(!board.is_full());
    }

    #[test]
    fn test_new_board_rejects_zero_side() {
        let err = Board::new(0).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidSide(0));
    }

    #[test]
    fn test_set_out_of_range() {
        let mut board = Board::new(3).unwrap();
        let err = board.set(9, Square::Occupied(Player::X)).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::IndexOutOfRange { index: 9, cells: 9 });
    }

    #[test]
    fn test_player_for_step_alternates() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(6), Player::X);
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new(3).unwrap();
        board.set(0, Square::Occupied(Player::X)).unwrap();
        board.set(4, Square::Occupied(Player::O)).unwrap();
        assert_eq!(board.display(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_display_pads_wide_indices() {
        let board = Board::new(4).unwrap();
        let first_row = board.display().lines().next().unwrap().to_string();
        assert_eq!(first_row, " 0| 1| 2| 3");
    }
}
