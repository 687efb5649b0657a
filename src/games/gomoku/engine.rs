//! Gomoku game engine.
//!
//! [`GameEngine`] is the single owner of the board, the side to move, the
//! game status and the undo history. Presentation code drives it through
//! [`GameEngine::apply_move`], [`GameEngine::undo`] and [`GameEngine::reset`]
//! and reads everything else through pure queries.

use super::action::{Move, MoveError, MoveRecord};
use super::history::HistoryStack;
use super::invariants::{GomokuInvariants, InvariantSet};
use super::rules;
use super::{Board, Cell, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Gomoku game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(super) board: Board,
    pub(super) current_player: Player,
    pub(super) status: GameStatus,
    pub(super) history: HistoryStack,
    /// Stones on the board; the sequence index of the next move.
    pub(super) moves_played: usize,
}

impl GameEngine {
    /// Creates a new game with Black to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            status: GameStatus::InProgress(Player::Black),
            history: HistoryStack::new(),
            moves_played: 0,
        }
    }

    /// Clears the board and history and hands the move back to Black.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::Black;
        self.status = GameStatus::InProgress(Player::Black);
        self.history.clear();
        self.moves_played = 0;
        debug!("Game reset");
        self.check_invariants();
    }

    /// Places the current player's stone at `(row, col)`.
    ///
    /// On success returns the status after the move. A winning move leaves the
    /// winner as the current player; any other move passes the turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] if the game has been won or drawn.
    /// - [`MoveError::InvalidMove`] if the coordinates are off the board.
    /// - [`MoveError::CellOccupied`] if the cell already holds a stone.
    ///
    /// On error the engine is unchanged.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameAlreadyOver(self.status));
        }
        let pos = Position::new(row, col).ok_or(MoveError::InvalidMove { row, col })?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, player.stone());

        if let Some(axis) = rules::winning_axis(&self.board, pos) {
            self.status = GameStatus::Won(player);
            info!(%player, ?axis, %pos, "Five in a row");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Drawn;
            info!("Board full, game drawn");
        } else {
            self.current_player = player.opponent();
            self.status = GameStatus::InProgress(self.current_player);
        }

        let record = MoveRecord::new(Move::new(player, pos), self.status, self.moves_played);
        self.moves_played += 1;
        self.history.push(record);
        debug!(sequence = record.sequence(), status = %self.status, "Move applied");

        self.check_invariants();
        Ok(self.status)
    }

    /// Takes back the most recent move.
    ///
    /// The player who made that move is to move again, and the game is back in
    /// progress even if the move had ended it.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoMovesToUndo`] if the history is empty, either because no
    /// move was made or because the remaining moves were evicted.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<MoveRecord, MoveError> {
        let record = self.history.pop().ok_or(MoveError::NoMovesToUndo)?;

        self.board.set(record.position(), Cell::Empty);
        self.current_player = record.player();
        self.status = GameStatus::InProgress(record.player());
        self.moves_played -= 1;
        debug!(sequence = record.sequence(), action = %record.action(), "Move undone");

        self.check_invariants();
        Ok(record)
    }

    /// Like [`undo`](Self::undo) but reports an empty history as `false`.
    pub fn try_undo(&mut self) -> bool {
        self.undo().is_ok()
    }

    /// Returns the cell at `(row, col)`, or `None` off the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        Position::new(row, col).map(|pos| self.board.get(pos))
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player to move (or the winner once the game is won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true if at least one move can be undone.
    pub fn undo_available(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of moves currently eligible for undo.
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Number of stones on the board.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Undoable moves, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &MoveRecord> + ExactSizeIterator {
        self.history.iter()
    }

    /// Captures a read-only view for presentation.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            status: self.status,
            current_player: self.current_player,
            history_depth: self.history.len(),
            undo_available: self.undo_available(),
            last_move: self.history.last().map(MoveRecord::action),
        }
    }

    /// Panics in debug builds if any engine invariant is broken.
    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GomokuInvariants::check_all(self)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Engine invariant violated: {}", descriptions);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of the engine for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board contents.
    pub board: Board,
    /// Game status.
    pub status: GameStatus,
    /// Player to move, or the winner.
    pub current_player: Player,
    /// Moves eligible for undo.
    pub history_depth: usize,
    /// Whether undo would succeed.
    pub undo_available: bool,
    /// Most recent undoable move.
    pub last_move: Option<Move>,
}
