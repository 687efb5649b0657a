//! Strictly Gomoku library - connect-five rule engine
//!
//! A self-contained state machine for two-player connect-five on a 15x15
//! board, with bounded single-step undo, plus a thin terminal adapter.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, turn, status and undo history
//! - **Rules**: placement-centred win check and full-board draw check
//! - **Invariants**: engine properties checked after every mutation in debug builds
//! - **Terminal**: line-oriented [`Session`] that renders engine queries as text
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! let status = engine.apply_move(7, 7)?;
//! assert_eq!(status, GameStatus::InProgress(Player::White));
//! assert!(engine.try_undo());
//! # Ok::<(), strictly_gomoku::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod terminal;

pub mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Terminal adapter
pub use terminal::{Command, CommandError, Flow, Session};

// Crate-level exports - Game types (gomoku)
pub use games::gomoku::{
    BOARD_SIZE, Board, Cell, GameEngine, GameSnapshot, GameStatus, HistoryStack, MAX_HISTORY,
    Move, MoveError, MoveRecord, Player, Position, WIN_LENGTH,
};
