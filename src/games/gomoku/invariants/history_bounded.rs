//! History bound invariant: the undo stack never exceeds its capacity.

use super::super::GameEngine;
use super::super::history::MAX_HISTORY;
use super::Invariant;

/// Invariant: History depth is at most [`MAX_HISTORY`].
pub struct HistoryBoundedInvariant;

impl Invariant<GameEngine> for HistoryBoundedInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history_depth() <= MAX_HISTORY
    }

    fn description() -> &'static str {
        "History depth never exceeds the undo limit"
    }
}
