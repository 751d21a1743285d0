//! Two-dimensional coordinates for board indices.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Column/row location of a square.
///
/// Index `i` on a board of side `n` sits at `(i mod n, i div n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column, counted from the left.
    x: usize,
    /// Row, counted from the top.
    y: usize,
}

impl Coordinate {
    /// Creates a coordinate from column and row.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Converts a board index to a coordinate.
    #[instrument]
    pub fn from_index(index: usize, side: usize) -> Self {
        Self {
            x: index % side,
            y: index / side,
        }
    }

    /// Converts back to a board index.
    #[instrument]
    pub fn to_index(self, side: usize) -> usize {
        self.y * side + self.x
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
