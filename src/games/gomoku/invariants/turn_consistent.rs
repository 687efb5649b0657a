//! Turn consistency invariant: status, side to move and last move agree.

use super::super::{GameEngine, GameStatus};
use super::Invariant;

/// Invariant: The side to move follows from the status and the last move.
///
/// - `InProgress(p)` means `p` is the current player and, if there is a last
///   move, `p` is its mover's opponent.
/// - `Won(w)` means `w` is the current player and made the last move.
/// - The last record's status is the engine's status.
pub struct TurnConsistentInvariant;

impl Invariant<GameEngine> for TurnConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let current = engine.current_player();
        let status_ok = match engine.status() {
            GameStatus::InProgress(p) | GameStatus::Won(p) => p == current,
            GameStatus::Drawn => true,
        };

        let Some(last) = engine.history().next_back() else {
            return status_ok;
        };

        let mover_ok = if engine.status().is_terminal() {
            last.player() == current
        } else {
            last.player().opponent() == current
        };

        status_ok && mover_ok && last.status_after() == engine.status()
    }

    fn description() -> &'static str {
        "Side to move is consistent with status and last move"
    }
}
