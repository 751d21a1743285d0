//! Game timeline: move history with time travel.
//!
//! The timeline owns every snapshot since the empty board, a cursor into
//! that history, and the order in which the move list is shown. Whose turn
//! it is never gets stored; it is always derived from the cursor.

use super::action::{Move, MoveOutcome, Rejection};
use super::contracts::{Contract, MoveContract};
use super::error::{ErrorKind, TicTacToeError, TicTacToeResult};
use super::rules::{self, Line, Verdict};
use super::types::{Board, Player, Square};
use super::view::{CurrentView, SortOrder, Status, TimelineEntry};
use tracing::{debug, info, instrument};

/// Full history of one game plus a playback cursor.
#[derive(Debug, Clone)]
pub struct Timeline {
    pub(crate) side: usize,
    pub(crate) lines: Vec<Line>,
    pub(crate) history: Vec<Board>,
    pub(crate) current_step: usize,
    pub(crate) order: SortOrder,
}

impl Timeline {
    /// Starts a new game on a `side × side` board.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSide` for a side of zero.
    #[instrument]
    pub fn new(side: usize) -> TicTacToeResult<Self> {
        Self::with_order(side, SortOrder::default())
    }

    /// Starts a new game with the move list in the given order.
    #[instrument]
    pub fn with_order(side: usize, order: SortOrder) -> TicTacToeResult<Self> {
        let board = Board::new(side)?;
        info!(side, cells = board.len(), "Starting new game");
        Ok(Self {
            side,
            lines: rules::lines_for_side(side),
            history: vec![board],
            current_step: 0,
            order,
        })
    }

    /// Returns the side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the winning lines for this board size.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns every snapshot, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of snapshots, including the empty start.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; the empty start is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Returns the step currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the move list order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns the player to move from the current step.
    pub fn next_mover(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Returns the snapshot at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// Evaluates the snapshot at the current step.
    pub fn current_verdict(&self) -> Verdict {
        rules::evaluate_lines(self.current_board(), &self.lines)
    }

    /// Status line for the current step.
    pub fn status(&self) -> Status {
        Status::from_verdict(&self.current_verdict(), self.next_mover())
    }

    /// Plays the next mover's mark at `index`.
    ///
    /// Any history after the current step is discarded first, so playing
    /// from a past step starts a new branch.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is off the board, or
    /// `InvariantViolation` if a debug postcondition fails. Moves on an
    /// occupied square or a decided board are ignored, not errors.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, index: usize) -> TicTacToeResult<MoveOutcome> {
        let cells = self.side * self.side;
        if index >= cells {
            return Err(TicTacToeError::new(ErrorKind::IndexOutOfRange { index, cells }));
        }

        if let Err(rejection) = MoveContract::pre(self, &index) {
            debug!(%rejection, "Ignoring move");
            return Ok(MoveOutcome::Ignored(rejection));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.next_mover();
        let mut board = self.current_board().clone();
        board.set(index, Square::Occupied(player))?;

        self.history.truncate(self.current_step + 1);
        self.history.push(board);
        self.current_step = self.history.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        let mov = Move::new(self.current_step, player, index);
        info!(%mov, "Move applied");
        Ok(MoveOutcome::Applied(mov))
    }

    /// Moves the cursor to `step`.
    ///
    /// History is kept, so later steps remain reachable until a new move
    /// is played.
    ///
    /// # Errors
    ///
    /// Returns `StepOutOfRange` if `step` is not in the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> TicTacToeResult<()> {
        if step >= self.history.len() {
            return Err(TicTacToeError::new(ErrorKind::StepOutOfRange {
                step,
                len: self.history.len(),
            }));
        }
        self.current_step = step;
        info!(step, next = %self.next_mover(), "Jumped to step");
        Ok(())
    }

    /// Flips the order of the move list.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = %self.order, "Toggled move order");
    }

    /// Returns the live board and its evaluation.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn current_view(&self) -> CurrentView {
        let verdict = self.current_verdict();
        let status = Status::from_verdict(&verdict, self.next_mover());
        CurrentView::new(self.current_board().clone(), verdict, status)
    }

    /// Builds the move list in the selected order.
    ///
    /// Each row names the absolute step it jumps to and the move that
    /// produced that step in forward time, whichever way the list runs.
    ///
    /// # Errors
    ///
    /// Only fails if the history was corrupted into snapshots of different
    /// sizes.
    #[instrument(skip(self), fields(order = %self.order, len = self.history.len()))]
    pub fn render_timeline(&self) -> TicTacToeResult<Vec<TimelineEntry>> {
        let len = self.history.len();

        match self.order {
            SortOrder::Ascending => self
                .history
                .iter()
                .enumerate()
                .map(|(position, board)| -> TicTacToeResult<TimelineEntry> {
                    let last_move = match position {
                        0 => None,
                        _ => rules::diff(board, &self.history[position - 1])?
                            .first()
                            .copied(),
                    };
                    Ok(TimelineEntry::new(
                        position,
                        last_move,
                        position == self.current_step,
                    ))
                })
                .collect(),
            SortOrder::Descending => {
                let reversed: Vec<&Board> = self.history.iter().rev().collect();
                let current = len - 1 - self.current_step;
                reversed
                    .iter()
                    .enumerate()
                    .map(|(position, board)| -> TicTacToeResult<TimelineEntry> {
                        // The neighbour after this slot is the earlier step.
                        let last_move = match reversed.get(position + 1) {
                            Some(earlier) => rules::diff(board, earlier)?.first().copied(),
                            None => None,
                        };
                        Ok(TimelineEntry::new(
                            len - 1 - position,
                            last_move,
                            position == current,
                        ))
                    })
                    .collect()
            }
        }
    }

    /// Moves recorded up to the end of the history, oldest first.
    ///
    /// # Errors
    ///
    /// Only fails if the history was corrupted.
    #[instrument(skip(self))]
    pub fn moves(&self) -> TicTacToeResult<Vec<Move>> {
        self.history
            .windows(2)
            .enumerate()
            .filter_map(|(k, pair)| match rules::diff(&pair[1], &pair[0]) {
                Ok(changes) => changes.first().and_then(|change| {
                    change
                        .value()
                        .player()
                        .map(|player| Ok(Move::new(k + 1, player, *change.index())))
                }),
                Err(e) => Some(Err(e)),
            })
            .collect()
    }

    /// Checks whether a move at `index` would be ignored right now.
    pub fn rejection_for(&self, index: usize) -> Option<Rejection> {
        MoveContract::pre(self, &index).err()
    }
}
