//! History consistency invariant: undoable moves are really on the board.

use super::super::{Cell, GameEngine};
use super::Invariant;

/// Invariant: The history agrees with the board.
///
/// - The number of stones equals the move counter.
/// - Every record's cell holds that record's player.
/// - Record sequences are contiguous and end at the latest move.
///
/// Moves evicted from the history stay on the board, so the history may be
/// shorter than the stone count but never longer.
pub struct HistoryMatchesBoardInvariant;

impl Invariant<GameEngine> for HistoryMatchesBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let stones = engine.board().occupied_count();
        if stones != engine.moves_played() || engine.history_depth() > stones {
            return false;
        }

        let cells_match = engine
            .history()
            .all(|r| engine.board().get(r.position()) == Cell::Occupied(r.player()));

        let contiguous = engine
            .history()
            .rev()
            .zip((0..stones).rev())
            .all(|(record, expected)| record.sequence() == expected);

        cells_match && contiguous
    }

    fn description() -> &'static str {
        "History records match the stones on the board"
    }
}
