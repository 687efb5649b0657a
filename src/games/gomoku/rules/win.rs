//! Win detection logic for gomoku.
//!
//! The check is centred on the stone that was just placed: only lines through
//! that cell are counted, so it must run right after a placement and is not a
//! general board scan.

use super::super::{Board, Position, WIN_LENGTH};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the four line directions through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Axis {
    /// Unit step along the axis; the opposite direction is its negation.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Counts the contiguous run of same-coloured stones through `pos` on `axis`.
///
/// Includes the stone at `pos` itself. Returns 0 for an empty cell.
pub fn line_length(board: &Board, pos: Position, axis: Axis) -> usize {
    let cell = board.get(pos);
    if cell.player().is_none() {
        return 0;
    }

    let (dr, dc) = axis.delta();
    let mut count = 1;
    for (sr, sc) in [(dr, dc), (-dr, -dc)] {
        let mut next = pos.step(sr, sc);
        while let Some(p) = next
            && board.get(p) == cell
        {
            count += 1;
            next = p.step(sr, sc);
        }
    }
    count
}

/// Returns the first axis through `pos` carrying at least five in a row.
#[instrument(skip(board))]
pub fn winning_axis(board: &Board, pos: Position) -> Option<Axis> {
    Axis::iter().find(|axis| line_length(board, pos, *axis) >= WIN_LENGTH)
}

/// Checks whether the stone at `pos` completes five (or more) in a row.
pub fn is_win(board: &Board, pos: Position) -> bool {
    winning_axis(board, pos).is_some()
}
