//! Connect-five (gomoku) on a fixed 15x15 board.

mod action;
mod engine;
mod history;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError, MoveRecord};
pub use engine::{GameEngine, GameSnapshot};
pub use history::{HistoryStack, MAX_HISTORY};
pub use position::Position;
pub use types::{BOARD_SIZE, Board, Cell, GameStatus, Player, WIN_LENGTH};
