/// A (row, column) pair identifying a board cell, each coordinate in `[0, 3)`.
///
/// A `Move` carries no mark; the mover's mark is supplied separately to
/// [`Board::apply_move`](crate::game_repr::Board::apply_move), which also
/// checks that the target cell is actually playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Move {
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
