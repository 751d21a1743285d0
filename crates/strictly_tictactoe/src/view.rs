//! Render-ready view models handed to the presentation layer.

use super::rules::{CellChange, Verdict};
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Order in which the move list is presented.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Caption for the control that flips the order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Sort Decreasing",
            SortOrder::Descending => "Sort Increasing",
        }
    }
}

/// One-line game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Someone completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Full board, no line.
    #[display("Cat's Game")]
    CatsGame,
    /// The game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Derives the status line from a verdict and the player to move.
    pub fn from_verdict(verdict: &Verdict, next: Player) -> Self {
        match verdict {
            Verdict::Won { winner, .. } => Status::Winner(*winner),
            Verdict::Draw => Status::CatsGame,
            Verdict::InProgress => Status::NextPlayer(next),
        }
    }
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct TimelineEntry {
    /// Absolute history step this row jumps to.
    step: usize,
    /// Button caption.
    label: String,
    /// The move that produced this step, in forward time.
    last_move: Option<CellChange>,
    /// Whether this row is the step currently shown.
    is_current: bool,
}

impl TimelineEntry {
    /// Creates a history row.
    pub fn new(step: usize, last_move: Option<CellChange>, is_current: bool) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self {
            step,
            label,
            last_move,
            is_current,
        }
    }

    /// Bracketed move annotation, e.g. `[X at (1,1)]`, or empty.
    pub fn annotation(&self) -> String {
        self.last_move
            .map(|change| format!("[{}]", change))
            .unwrap_or_default()
    }
}

/// The live board plus everything needed to decorate it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct CurrentView {
    /// Snapshot at the current step.
    board: Board,
    /// Win/draw evaluation of that snapshot.
    verdict: Verdict,
    /// Status line for the snapshot.
    status: Status,
}

impl CurrentView {
    /// Creates a view.
    pub fn new(board: Board, verdict: Verdict, status: Status) -> Self {
        Self {
            board,
            verdict,
            status,
        }
    }

    /// Squares to highlight.
    pub fn winning_cells(&self) -> &[usize] {
        self.verdict.winning_cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle().toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Ascending.toggle_label(), "Sort Decreasing");
    }

    #[test]
    fn test_sort_order_parses() {
        assert_eq!(SortOrder::from_str("descending").unwrap(), SortOrder::Descending);
        assert_eq!(SortOrder::Ascending.to_string(), "ascending");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(Status::CatsGame.to_string(), "Cat's Game");
        assert_eq!(Status::NextPlayer(Player::X).to_string(), "Next player: X");
    }

    #[test]
    fn test_entry_labels() {
        assert_eq!(TimelineEntry::new(0, None, true).label(), "Go to game start");
        assert_eq!(TimelineEntry::new(3, None, false).label(), "Go to move #3");
        assert_eq!(TimelineEntry::new(0, None, true).annotation(), "");
    }
}
