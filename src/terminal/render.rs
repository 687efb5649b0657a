//! Plain-text rendering of the engine's state.

use crate::config::GameConfig;
use crate::games::gomoku::{BOARD_SIZE, Cell, GameEngine, GameStatus, Player};
use std::fmt::Write;

/// Returns the configured display name for a player.
pub fn label(config: &GameConfig, player: Player) -> &str {
    match player {
        Player::Black => config.black_label().as_str(),
        Player::White => config.white_label().as_str(),
    }
}

fn glyph(config: &GameConfig, cell: Cell) -> char {
    match cell {
        Cell::Empty => *config.empty_glyph(),
        Cell::Occupied(Player::Black) => *config.black_glyph(),
        Cell::Occupied(Player::White) => *config.white_glyph(),
    }
}

/// Draws the board, one row per line.
pub fn render_board(engine: &GameEngine, config: &GameConfig) -> String {
    let mut out = String::new();
    let coords = *config.show_coordinates();

    if coords {
        out.push_str("   ");
        for col in 0..BOARD_SIZE {
            let _ = write!(out, "{:>2}", col);
        }
        out.push('\n');
    }

    for (r, row) in engine.board().rows().iter().enumerate() {
        if coords {
            let _ = write!(out, "{:>2} ", r);
        }
        for cell in row {
            let _ = write!(out, " {}", glyph(config, *cell));
        }
        out.push('\n');
    }
    out
}

/// Describes the game status for the player.
pub fn status_line(engine: &GameEngine, config: &GameConfig) -> String {
    match engine.status() {
        GameStatus::InProgress(player) => format!("{} to move", label(config, player)),
        GameStatus::Won(player) => format!("{} wins!", label(config, player)),
        GameStatus::Drawn => "Draw!".to_string(),
    }
}

/// Reports how many moves can still be taken back.
pub fn undo_line(engine: &GameEngine) -> String {
    format!("Undoable moves: {}", engine.history_depth())
}

/// Board, status and undo lines together.
pub fn render(engine: &GameEngine, config: &GameConfig) -> String {
    format!(
        "{}{}\n{}\n",
        render_board(engine, config),
        status_line(engine, config),
        undo_line(engine)
    )
}
