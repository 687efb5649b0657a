//! Board coordinates.

use super::action::MoveError;
use super::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};

/// A validated position on the board, `(row, col)`, both in `0..BOARD_SIZE`.
///
/// Positions can only be built through [`Position::new`], by stepping from
/// an existing position, or by deserializing through the same bounds check,
/// so every `Position` is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: usize,
    col: usize,
}

/// Unchecked wire form of a [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = MoveError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col).ok_or(MoveError::InvalidMove {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Position {
    /// Creates a position, or `None` if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Row index (0 is the top).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0 is the left).
    pub fn col(self) -> usize {
        self.col
    }

    /// Steps one cell in direction `(dr, dc)`, or `None` past the edge.
    pub fn step(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Self::new(row, col)
    }

    /// Iterates over every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
