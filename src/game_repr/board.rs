//! Board state representation, move validation, and terminal-state detection.

use super::{Cell, Mark, Move};
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

pub const BOARD_ROWS: usize = 3;
pub const BOARD_COLS: usize = 3;

/// Raised by [`Board::apply_move`] when the target cell is out of range or
/// already occupied.
///
/// This is a caller-contract violation, not a recoverable runtime fault: the
/// orchestrating layer is expected to check [`Board::is_valid_move`] before
/// applying, so this error should never reach a player-visible state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveError {
    #[error("coordinates ({row}, {col}) are outside the 3x3 board")]
    OutOfRange { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied by {occupant}")]
    Occupied { row: usize, col: usize, occupant: Mark },
}

/// Result of the game as derived from the board contents.
///
/// Never stored; recomputed on demand by [`Board::outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Mark),
    Draw,
}

/// A 3x3 grid of cells.
///
/// Created empty at game start, mutated in place by each move, and reset to
/// empty when a new game begins. During play a cell never transitions from
/// occupied back to empty; the only exception is the search engine's
/// mutate-then-undo exploration, which restores every hypothetical move
/// before returning (see [`crate::agent::ai`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_COLS]; BOARD_ROWS],
}

impl Board {
    /// Create a board with all cells empty.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_COLS]; BOARD_ROWS],
        }
    }

    /// Clear all cells for a new game.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_COLS]; BOARD_ROWS];
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// True iff `row` and `col` are each in `[0, 3)` and the cell is empty.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        row < BOARD_ROWS && col < BOARD_COLS && self.cells[row][col].is_empty()
    }

    /// Place `mark` at `(row, col)`.
    ///
    /// Fails with [`InvalidMoveError`] if the coordinates are out of range or
    /// the cell is occupied. Callers are expected to have already checked
    /// [`Board::is_valid_move`].
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), InvalidMoveError> {
        if row >= BOARD_ROWS || col >= BOARD_COLS {
            return Err(InvalidMoveError::OutOfRange { row, col });
        }
        if let Some(occupant) = self.cells[row][col].mark() {
            return Err(InvalidMoveError::Occupied { row, col, occupant });
        }
        self.cells[row][col] = mark.into();
        Ok(())
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// True iff all three cells of any row, any column, or either diagonal
    /// equal `mark`.
    pub fn is_winner(&self, mark: Mark) -> bool {
        let owns = |row: usize, col: usize| self.cells[row][col] == Cell::Occupied(mark);

        for i in 0..BOARD_ROWS {
            if (0..BOARD_COLS).all(|j| owns(i, j)) {
                return true;
            }
            if (0..BOARD_ROWS).all(|j| owns(j, i)) {
                return true;
            }
        }
        (0..BOARD_ROWS).all(|i| owns(i, i)) || (0..BOARD_ROWS).all(|i| owns(i, BOARD_COLS - 1 - i))
    }

    /// Derive the game outcome from the board contents.
    ///
    /// Win checks take precedence over fullness, so a winning final move on a
    /// full board reports the win rather than a draw.
    pub fn outcome(&self) -> GameOutcome {
        if self.is_winner(Mark::X) {
            GameOutcome::Win(Mark::X)
        } else if self.is_winner(Mark::O) {
            GameOutcome::Win(Mark::O)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// All empty cells in row-major order.
    ///
    /// The inline capacity covers the whole grid, so this never allocates.
    pub fn empty_cells(&self) -> SmallVec<[Move; 9]> {
        let mut cells = SmallVec::new();
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                if self.cells[row][col].is_empty() {
                    cells.push(Move::new(row, col));
                }
            }
        }
        cells
    }

    /// Place `mark` without validation. Search-internal: paired with
    /// [`Board::clear`] so every hypothetical move is undone before the
    /// search returns.
    pub(crate) fn place(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = mark.into();
    }

    /// Empty a cell. Search-internal, see [`Board::place`].
    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "---+---+---")?;
            }
            writeln!(
                f,
                " {} | {} | {} ",
                row[0].as_char(),
                row[1].as_char(),
                row[2].as_char()
            )?;
        }
        Ok(())
    }
}
