//! Draw detection logic for gomoku.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board after a non-winning move is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|c| *c != Cell::Empty)
}
