//! Positional diff between two board snapshots.

use crate::error::{ErrorKind, TicTacToeError, TicTacToeResult};
use crate::position::Coordinate;
use crate::types::{Board, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square whose value differs between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct CellChange {
    /// Board index of the changed square.
    index: usize,
    /// Column/row of the changed square.
    coordinate: Coordinate,
    /// Value of the square in the newer snapshot.
    value: Square,
}

impl std::fmt::Display for CellChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.value, self.coordinate)
    }
}

/// Lists every square where `current` differs from `previous`.
///
/// Entries come out in ascending index order and carry the value from
/// `current`.
///
/// # Errors
///
/// Returns `LengthMismatch` if the boards have different sizes.
#[instrument(skip(current, previous), fields(len = current.len()))]
pub fn diff(current: &Board, previous: &Board) -> TicTacToeResult<Vec<CellChange>> {
    if current.len() != previous.len() {
        return Err(TicTacToeError::new(ErrorKind::LengthMismatch {
            left: current.len(),
            right: previous.len(),
        }));
    }

    Ok(current
        .squares()
        .iter()
        .zip(previous.squares())
        .enumerate()
        .filter(|(_, (now, before))| now != before)
        .map(|(index, (now, _))| CellChange {
            index,
            coordinate: current.coordinate(index),
            value: *now,
        })
        .collect())
}
