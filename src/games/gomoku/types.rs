//! Core domain types for gomoku.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Board dimension (the board is `BOARD_SIZE` × `BOARD_SIZE`).
pub const BOARD_SIZE: usize = 15;

/// Number of contiguous stones needed to win.
pub const WIN_LENGTH: usize = 5;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Black (moves first).
    Black,
    /// White (moves second).
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Returns the stone this player places.
    pub fn stone(self) -> Cell {
        Cell::Occupied(self)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// A cell on the gomoku board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's stone.
    Occupied(Player),
}

impl Cell {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 15x15 gomoku board.
///
/// Serializes as its rows, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all rows, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Counts occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c != Cell::Empty)
            .count()
    }

    /// Formats the board as a plain grid: `X` for Black, `O` for White, `.` for empty.
    pub fn display(&self) -> String {
        let mut result = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
        for row in &self.cells {
            for cell in row {
                result.push(match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::Black) => 'X',
                    Cell::Occupied(Player::White) => 'O',
                });
            }
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the player is the one to move.
    InProgress(Player),
    /// Game ended in a win.
    Won(Player),
    /// Game ended with a full board.
    Drawn,
}

impl GameStatus {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "{} to move", player),
            GameStatus::Won(player) => write!(f, "{} wins", player),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert!(board.rows().iter().flatten().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        let pos = Position::new(3, 11).unwrap();
        board.set(pos, Player::White.stone());
        assert_eq!(board.get(pos), Cell::Occupied(Player::White));
        assert!(!board.is_empty(pos));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_display_marks_stones() {
        let mut board = Board::new();
        board.set(Position::new(0, 0).unwrap(), Player::Black.stone());
        board.set(Position::new(0, 1).unwrap(), Player::White.stone());
        let text = board.display();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("XO."));
        assert_eq!(text.lines().count(), BOARD_SIZE);
    }

    #[test]
    fn test_board_serializes_as_rows() {
        let mut board = Board::new();
        board.set(Position::new(7, 7).unwrap(), Player::Black.stone());
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(BOARD_SIZE));
        assert_eq!(json[7][7]["Occupied"], "Black");
        assert_eq!(json[0][0], "Empty");

        let back: Board = serde_json::from_value(json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!GameStatus::InProgress(Player::Black).is_terminal());
        assert!(GameStatus::Won(Player::White).is_terminal());
        assert!(GameStatus::Drawn.is_terminal());
        assert_eq!(GameStatus::Won(Player::White).winner(), Some(Player::White));
        assert_eq!(GameStatus::Drawn.winner(), None);
    }
}
