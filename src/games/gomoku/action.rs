//! First-class action types for gomoku.
//!
//! A [`Move`] is the player's intent; a [`MoveRecord`] is what the engine
//! remembers about an applied move so that it can be reversed.

use super::{GameStatus, Player, Position};
use serde::{Deserialize, Serialize};

/// A move in gomoku: a player placing a stone at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the stone is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Immutable record of one applied move, kept on the undo history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveRecord {
    action: Move,
    status_after: GameStatus,
    sequence: usize,
}

impl MoveRecord {
    /// The move that was applied.
    pub fn action(&self) -> Move {
        self.action
    }

    /// The player who made the move.
    pub fn player(&self) -> Player {
        self.action.player
    }

    /// Where the stone was placed.
    pub fn position(&self) -> Position {
        self.action.position
    }

    /// Game status immediately after the move.
    pub fn status_after(&self) -> GameStatus {
        self.status_after
    }

    /// Whether this move ended the game.
    pub fn ended_game(&self) -> bool {
        self.status_after.is_terminal()
    }

    /// Zero-based index of the move since the last reset.
    ///
    /// Keeps counting past history evictions, so it is not an index into the
    /// history stack.
    pub fn sequence(&self) -> usize {
        self.sequence
    }
}

/// Error that can occur when applying or undoing a move.
///
/// Every variant leaves the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates are off the board.
    #[display("Invalid move: ({}, {}) is off the board", row, col)]
    InvalidMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell at the position already holds a stone.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over ({})", _0)]
    GameAlreadyOver(GameStatus),

    /// The undo history is empty.
    #[display("No moves to undo")]
    NoMovesToUndo,
}

impl std::error::Error for MoveError {}
